/// C `fmod`: the result carries the sign of `x`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

/// Python-style remainder of `x` by 1.0, always in `[0, 1)`.
#[inline]
pub fn frac_floor(x: f64) -> f64 {
    x - libm::floor(x)
}

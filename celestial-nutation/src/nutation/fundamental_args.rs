//! Fundamental arguments for the nutation series.
//!
//! Two argument sets feed IAU 2000A:
//!
//! - The five Delaunay arguments `[l, l', F, D, Ω]`, quartic polynomials in
//!   arcseconds (IERS Conventions 2003). They drive the luni-solar series.
//! - A fourteen-angle planetary set: linear approximations of the Delaunay
//!   arguments, mean longitudes of Mercury through Neptune (Souchay et al.
//!   1999) and the general precession in longitude. They drive the planetary
//!   series.
//!
//! All functions take `t` in Julian centuries of TT since J2000.0 and return
//! radians. Reduction uses [`fmod`], so a negative polynomial value yields a
//! negative angle; nothing is shifted into `[0, 2π)`.

use crate::config::MAX_FUNDAMENTAL_ARGUMENT_TERMS;
use crate::constants::{ARCSEC_TO_RAD, CIRCULAR_ARCSECONDS, TWOPI};
use crate::math::fmod;

/// Delaunay polynomial coefficients in arcseconds, `c0..c4` per argument.
///
/// Rows: l (Moon mean anomaly), l' (Sun mean anomaly), F (Moon argument of
/// latitude), D (mean elongation of the Moon from the Sun), Ω (mean
/// longitude of the Moon's ascending node).
#[rustfmt::skip]
pub const DELAUNAY_COEFFICIENTS: [[f64; 5]; 5] = [
    [ 485868.249036, 1717915923.2178,  31.8792,  0.051635, -0.00024470],
    [1287104.79305,   129596581.0481,  -0.5532,  0.000136, -0.00001149],
    [ 335779.526232, 1739527262.8478, -12.7512, -0.001037,  0.00000417],
    [1072260.70369,  1602961601.2090,  -6.3706,  0.006593, -0.00003169],
    [ 450160.398036,   -6962890.5431,   7.4722,  0.007702, -0.00005939],
];

/// Planetary argument constants and rates, `(c0 rad, c1 rad/century)`.
///
/// The last row is the general precession in longitude, which is multiplied
/// by `t` once more before reduction.
#[rustfmt::skip]
pub const PLANETARY_ARGUMENT_COEFFICIENTS: [(f64, f64); 14] = [
    (2.35555598,  8328.6914269554),
    (6.24006013,   628.301955),
    (1.627905234, 8433.466158131),
    (5.198466741, 7771.3771468121),
    (2.18243920,   -33.757045),
    (4.402608842, 2608.7903141574),
    (3.176146697, 1021.3285546211),
    (1.753470314,  628.3075849991),
    (6.203480913,  334.0612426700),
    (0.599546497,   52.9690962641),
    (0.874016757,   21.3299104960),
    (5.481293871,    7.4781598567),
    (5.321159000,    3.8127774000),
    (0.02438175,     0.00000538691),
];

/// Evaluates one Delaunay polynomial with its first `terms` coefficients,
/// highest power first, then reduces it to radians.
#[inline]
fn delaunay(coefficients: &[f64; 5], t: f64, terms: usize) -> f64 {
    let terms = terms.clamp(1, MAX_FUNDAMENTAL_ARGUMENT_TERMS);
    let mut a = coefficients[terms - 1];
    for c in coefficients[..terms - 1].iter().rev() {
        a = a * t + c;
    }
    fmod(a, CIRCULAR_ARCSECONDS) * ARCSEC_TO_RAD
}

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// ```
/// use celestial_nutation::nutation::fundamental_arguments;
///
/// let args = fundamental_arguments(0.0);
/// assert!((args[0] - 2.355555743493879).abs() < 1e-12);
/// ```
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    fundamental_arguments_truncated(t, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
}

/// The Delaunay arguments using only the first `terms` polynomial
/// coefficients. `terms` is clamped to `1..=5`; `2` gives the linear form of
/// IAU 2000B.
pub fn fundamental_arguments_truncated(t: f64, terms: usize) -> [f64; 5] {
    let mut args = [0.0; 5];
    for (arg, coefficients) in args.iter_mut().zip(DELAUNAY_COEFFICIENTS.iter()) {
        *arg = delaunay(coefficients, t, terms);
    }
    args
}

/// The fourteen planetary-series arguments in radians.
///
/// Order: `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]`.
pub fn planetary_arguments(t: f64) -> [f64; 14] {
    let mut args = [0.0; 14];
    for (arg, &(c0, c1)) in args.iter_mut().zip(PLANETARY_ARGUMENT_COEFFICIENTS.iter()) {
        *arg = t * c1 + c0;
    }
    args[13] *= t;
    for arg in args.iter_mut() {
        *arg = fmod(*arg, TWOPI);
    }
    args
}

/// Named access to the Delaunay arguments, implemented on `f64` time values.
///
/// ```
/// use celestial_nutation::nutation::FundamentalArgs;
///
/// let t: f64 = 0.1;
/// let om = t.moon_ascending_node_longitude();
/// assert!(om.abs() < std::f64::consts::TAU);
/// ```
pub trait FundamentalArgs {
    /// Mean anomaly of the Moon, l.
    fn moon_mean_anomaly(&self) -> f64;

    /// Mean anomaly of the Sun, l'.
    fn sun_mean_anomaly(&self) -> f64;

    /// Mean argument of latitude of the Moon, F.
    fn mean_argument_of_latitude(&self) -> f64;

    /// Mean elongation of the Moon from the Sun, D.
    fn mean_elongation(&self) -> f64;

    /// Mean longitude of the Moon's ascending node, Ω.
    fn moon_ascending_node_longitude(&self) -> f64;
}

impl FundamentalArgs for f64 {
    #[inline]
    fn moon_mean_anomaly(&self) -> f64 {
        delaunay(&DELAUNAY_COEFFICIENTS[0], *self, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
    }

    #[inline]
    fn sun_mean_anomaly(&self) -> f64 {
        delaunay(&DELAUNAY_COEFFICIENTS[1], *self, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
    }

    #[inline]
    fn mean_argument_of_latitude(&self) -> f64 {
        delaunay(&DELAUNAY_COEFFICIENTS[2], *self, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
    }

    #[inline]
    fn mean_elongation(&self) -> f64 {
        delaunay(&DELAUNAY_COEFFICIENTS[3], *self, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
    }

    #[inline]
    fn moon_ascending_node_longitude(&self) -> f64 {
        delaunay(&DELAUNAY_COEFFICIENTS[4], *self, MAX_FUNDAMENTAL_ARGUMENT_TERMS)
    }
}

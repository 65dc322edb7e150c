pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Arcseconds in a full circle (360 × 3600).
pub const CIRCULAR_ARCSECONDS: f64 = 1296000.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

/// Series amplitudes are tabulated in units of 0.1 microarcsecond.
pub const TENTH_MICROARCSEC_TO_RAD: f64 = ARCSEC_TO_RAD / 1e7;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Rows in the complete IAU 2000A luni-solar series.
pub const IAU2000A_LUNISOLAR_TERMS: usize = 678;

/// Rows in the complete IAU 2000A planetary series.
pub const IAU2000A_PLANETARY_TERMS: usize = 687;

/// Rows kept by the truncated IAU 2000B series.
pub const IAU2000B_LUNISOLAR_TERMS: usize = 77;

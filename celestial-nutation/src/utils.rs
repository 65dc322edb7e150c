//! Time argument helpers.
//!
//! Every series in this crate is a function of `t`, Julian centuries of TT
//! elapsed since J2000.0. [`jd_to_centuries`] derives it from a two-part
//! Julian Date; the split preserves precision, so the usual convention is
//! `jd1 = 2451545.0` and `jd2` = days from that epoch.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// # Example
///
/// ```
/// use celestial_nutation::utils::jd_to_centuries;
/// use celestial_nutation::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Inverse of [`jd_to_centuries`], returned as `(J2000_JD, days)`.
#[inline]
pub fn centuries_to_jd(t: f64) -> (f64, f64) {
    (J2000_JD, t * DAYS_PER_JULIAN_CENTURY)
}

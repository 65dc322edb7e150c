//! Obliquity of the ecliptic.
//!
//! The obliquity is the angle between Earth's equatorial plane and the
//! ecliptic, about 23.4° and slowly decreasing.
//!
//! - [`mean_obliquity`]: the smoothly varying IAU 2006 value
//! - [`true_obliquity`]: mean obliquity plus the nutation in obliquity Δε
//!
//! Both take a two-part Julian Date (TT) and return radians.
//!
//! # Example
//!
//! ```
//! use celestial_nutation::obliquity::mean_obliquity;
//! use celestial_nutation::constants::J2000_JD;
//!
//! let eps = mean_obliquity(J2000_JD, 0.0);
//! assert!((eps.to_degrees() - 23.4392794).abs() < 1e-6);
//! ```

use crate::constants::ARCSEC_TO_RAD;
use crate::nutation::NutationResult;
use crate::utils::jd_to_centuries;

/// Mean obliquity of the ecliptic, IAU 2006 precession.
///
/// At J2000.0: ε₀ = 84381.406″
pub fn mean_obliquity(jd1: f64, jd2: f64) -> f64 {
    let t = jd_to_centuries(jd1, jd2);

    let obliquity_arcsec = 84381.406
        + (-46.836769
            + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
            * t;

    obliquity_arcsec * ARCSEC_TO_RAD
}

/// True obliquity: [`mean_obliquity`] plus `nutation.delta_eps`.
pub fn true_obliquity(jd1: f64, jd2: f64, nutation: &NutationResult) -> f64 {
    mean_obliquity(jd1, jd2) + nutation.delta_eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000_JD;

    #[test]
    fn test_sofa_obl06_reference() {
        let eps = mean_obliquity(2400000.5, 54388.0);
        assert!((eps - 0.4090749229387258204).abs() < 1e-14);
    }

    #[test]
    fn test_epoch_value() {
        assert_eq!(mean_obliquity(J2000_JD, 0.0), 84381.406 * ARCSEC_TO_RAD);
    }

    #[test]
    fn test_decreasing_near_epoch() {
        assert!(mean_obliquity(J2000_JD, 36525.0) < mean_obliquity(J2000_JD, 0.0));
    }

    #[test]
    fn test_true_obliquity_adds_delta_eps() {
        let nutation = NutationResult {
            delta_psi: -1.0e-5,
            delta_eps: 4.0e-5,
        };
        let mean = mean_obliquity(J2000_JD, 1000.0);
        assert_eq!(true_obliquity(J2000_JD, 1000.0, &nutation), mean + 4.0e-5);
    }
}

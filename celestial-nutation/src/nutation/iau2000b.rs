//! IAU 2000B nutation model.
//!
//! A truncation of IAU 2000A for applications that do not need
//! sub-milliarcsecond precision:
//!
//! - the Delaunay arguments are evaluated to the linear term only
//! - only the first 77 luni-solar rows are summed
//! - the planetary series is dropped, replaced by fixed offsets of
//!   -0.135 mas in longitude and +0.388 mas in obliquity
//!
//! Accuracy is about 1 mas over 1995-2050. Everything needed is compiled in,
//! so the model is always available.
//!
//! # References
//!
//! - McCarthy, D. D. & Luzum, B. J., "An Abridged Model of the Precession-Nutation
//!   of the Celestial Pole", Celestial Mechanics and Dynamical Astronomy, 2003
//! - SOFA Library: `iauNut00b`

use super::iau2000a::NutationIAU2000A;
use super::types::{NutationResult, RawNutation};
use crate::utils::jd_to_centuries;

/// Offset standing in for the planetary series in longitude, 0.1 µas.
pub const PLANETARY_OFFSET_LONGITUDE: f64 = -1350.0;

/// Offset standing in for the planetary series in obliquity, 0.1 µas.
pub const PLANETARY_OFFSET_OBLIQUITY: f64 = 3880.0;

/// IAU 2000B nutation calculator.
///
/// # Example
///
/// ```
/// use celestial_nutation::nutation::NutationIAU2000B;
///
/// let nut = NutationIAU2000B::new();
/// let result = nut.compute(2400000.5, 53736.0);
/// assert!((result.delta_psi - -0.9632552291148362783e-5).abs() < 1e-13);
/// assert!((result.delta_eps - 0.4063197106621159367e-4).abs() < 1e-13);
/// ```
#[derive(Debug, Clone)]
pub struct NutationIAU2000B {
    series: NutationIAU2000A,
}

impl Default for NutationIAU2000B {
    fn default() -> Self {
        Self::new()
    }
}

impl NutationIAU2000B {
    pub fn new() -> Self {
        Self {
            series: NutationIAU2000A::iau2000b_series(),
        }
    }

    /// Nutation for a two-part Julian Date (TT), in radians.
    pub fn compute(&self, jd1: f64, jd2: f64) -> NutationResult {
        self.compute_centuries(jd_to_centuries(jd1, jd2))
    }

    pub fn compute_centuries(&self, t: f64) -> NutationResult {
        self.compute_raw(t).to_radians()
    }

    /// Truncated luni-solar sum plus the planetary offsets, in 0.1 µas.
    pub fn compute_raw(&self, t: f64) -> RawNutation {
        self.series.compute_raw(t)
            + RawNutation {
                dpsi: PLANETARY_OFFSET_LONGITUDE,
                deps: PLANETARY_OFFSET_OBLIQUITY,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutation::fundamental_args::fundamental_arguments_truncated;

    #[test]
    fn test_uses_truncated_series() {
        let nut = NutationIAU2000B::new();
        let t = 0.06;
        let args = fundamental_arguments_truncated(t, 2);
        let ls = nut.series.compute_lunisolar(&args, t);
        let raw = nut.compute_raw(t);
        assert_eq!(raw.dpsi, ls.dpsi + PLANETARY_OFFSET_LONGITUDE);
        assert_eq!(raw.deps, ls.deps + PLANETARY_OFFSET_OBLIQUITY);
    }

    #[test]
    fn test_offsets_in_milliarcseconds() {
        // 1e4 units per mas.
        assert_eq!(PLANETARY_OFFSET_LONGITUDE / 1e4, -0.135);
        assert_eq!(PLANETARY_OFFSET_OBLIQUITY / 1e4, 0.388);
    }

    #[test]
    fn test_sofa_nut00b_reference() {
        let r = NutationIAU2000B::new().compute(2400000.5, 53736.0);
        assert!((r.delta_psi - -0.9632552291148362783e-5).abs() < 1e-13);
        assert!((r.delta_eps - 0.4063197106621159367e-4).abs() < 1e-13);
    }

    #[test]
    fn test_no_planetary_rows() {
        let nut = NutationIAU2000B::new();
        assert_eq!(nut.series.config().planetary_terms, 0);
        assert_eq!(nut.series.config().lunisolar_terms, 77);
        assert_eq!(nut.series.config().fundamental_argument_terms, 2);
    }
}

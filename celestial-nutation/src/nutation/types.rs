//! Result types and the model facade.
//!
//! - [`NutationResult`]: Δψ and Δε in radians
//! - [`RawNutation`]: the same pair in the series' native unit of 0.1 µas
//! - [`NutationModel`]: picks IAU 2000A or IAU 2000B behind one `compute` call

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::iau2000a::NutationIAU2000A;
use super::iau2000b::NutationIAU2000B;
use super::tables::CoefficientTables;
use crate::config::NutationConfig;
use crate::constants::TENTH_MICROARCSEC_TO_RAD;
use crate::errors::AstroResult;

/// Nutation in longitude and obliquity, in radians.
///
/// - `delta_psi` (Δψ): measured along the ecliptic, positive eastward
/// - `delta_eps` (Δε): positive values increase the obliquity of the ecliptic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutationResult {
    /// Nutation in longitude (Δψ) in radians.
    pub delta_psi: f64,

    /// Nutation in obliquity (Δε) in radians.
    pub delta_eps: f64,
}

impl NutationResult {
    /// Converts back to 0.1 µas units.
    pub fn to_raw(&self) -> RawNutation {
        RawNutation {
            dpsi: self.delta_psi / TENTH_MICROARCSEC_TO_RAD,
            deps: self.delta_eps / TENTH_MICROARCSEC_TO_RAD,
        }
    }
}

/// Series sums in units of 0.1 microarcsecond, before conversion to radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNutation {
    pub dpsi: f64,
    pub deps: f64,
}

impl RawNutation {
    pub fn to_radians(&self) -> NutationResult {
        NutationResult {
            delta_psi: self.dpsi * TENTH_MICROARCSEC_TO_RAD,
            delta_eps: self.deps * TENTH_MICROARCSEC_TO_RAD,
        }
    }
}

impl std::ops::Add for RawNutation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            dpsi: self.dpsi + rhs.dpsi,
            deps: self.deps + rhs.deps,
        }
    }
}

#[derive(Debug, Clone)]
enum Calculator {
    Iau2000A(NutationIAU2000A),
    Iau2000B(NutationIAU2000B),
}

/// A facade for computing nutation with a selected IAU model.
///
/// ```
/// use celestial_nutation::nutation::NutationModel;
///
/// let model = NutationModel::iau2000b();
/// let result = model.compute(2451545.0, 0.0);
/// assert!(result.delta_psi.abs() < 1e-4);
/// ```
///
/// `compute` accepts a two-part Julian Date (TT) interpreted as `jd1 + jd2`;
/// the usual split is `jd1 = 2451545.0` and `jd2` = days since J2000.0.
#[derive(Debug, Clone)]
pub struct NutationModel {
    calculator: Calculator,
}

impl NutationModel {
    /// The complete IAU 2000A model. Fails unless `tables` carries every row.
    pub fn iau2000a(tables: Arc<CoefficientTables>) -> AstroResult<Self> {
        Ok(Self {
            calculator: Calculator::Iau2000A(NutationIAU2000A::new(tables)?),
        })
    }

    pub fn iau2000a_with_config(
        tables: Arc<CoefficientTables>,
        config: NutationConfig,
    ) -> AstroResult<Self> {
        Ok(Self {
            calculator: Calculator::Iau2000A(NutationIAU2000A::with_config(tables, config)?),
        })
    }

    /// IAU 2000B over the built-in tables.
    pub fn iau2000b() -> Self {
        Self {
            calculator: Calculator::Iau2000B(NutationIAU2000B::new()),
        }
    }

    pub fn compute(&self, jd1: f64, jd2: f64) -> NutationResult {
        match &self.calculator {
            Calculator::Iau2000A(nut) => nut.compute(jd1, jd2),
            Calculator::Iau2000B(nut) => nut.compute(jd1, jd2),
        }
    }
}

impl Default for NutationModel {
    /// IAU 2000B, the only model that needs no external tables.
    fn default() -> Self {
        Self::iau2000b()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_conversion_round_trip() {
        let raw = RawNutation {
            dpsi: -172064161.0,
            deps: 92052331.0,
        };
        let back = raw.to_radians().to_raw();
        assert!((back.dpsi - raw.dpsi).abs() <= raw.dpsi.abs() * 4.0 * f64::EPSILON);
        assert!((back.deps - raw.deps).abs() <= raw.deps.abs() * 4.0 * f64::EPSILON);
    }

    #[test]
    fn test_raw_unit_scale() {
        // 1e7 units are one arcsecond.
        let r = RawNutation {
            dpsi: 1e7,
            deps: 0.0,
        }
        .to_radians();
        assert_eq!(r.delta_psi, crate::constants::ARCSEC_TO_RAD);
        assert_eq!(r.delta_eps, 0.0);
    }

    #[test]
    fn test_raw_addition() {
        let a = RawNutation { dpsi: 1.0, deps: 2.0 };
        let b = RawNutation { dpsi: 0.5, deps: -4.0 };
        assert_eq!(a + b, RawNutation { dpsi: 1.5, deps: -2.0 });
    }

    #[test]
    fn test_facade_matches_models() {
        let model = NutationModel::default();
        let direct = NutationIAU2000B::new().compute(2451545.0, 1234.5);
        assert_eq!(model.compute(2451545.0, 1234.5), direct);

        let tables = CoefficientTables::builtin();
        let config = NutationConfig {
            lunisolar_terms: 40,
            planetary_terms: 0,
            ..NutationConfig::default()
        };
        let a = NutationModel::iau2000a_with_config(tables.clone(), config).unwrap();
        let direct = NutationIAU2000A::with_config(tables, config)
            .unwrap()
            .compute(2451545.0, 1234.5);
        assert_eq!(a.compute(2451545.0, 1234.5), direct);
    }

    #[test]
    fn test_facade_full_model_needs_complete_tables() {
        assert!(NutationModel::iau2000a(CoefficientTables::builtin()).is_err());
    }

    #[test]
    fn test_facade_rejects_bad_config() {
        let config = NutationConfig {
            fundamental_argument_terms: 0,
            ..NutationConfig::default()
        };
        assert!(NutationModel::iau2000a_with_config(CoefficientTables::builtin(), config).is_err());
    }

    #[test]
    fn test_result_serializes() {
        let r = NutationResult {
            delta_psi: -1.0e-5,
            delta_eps: 4.0e-5,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: NutationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

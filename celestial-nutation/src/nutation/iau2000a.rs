//! IAU 2000A nutation model.
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε) from the
//! MHB2000 rigid-Earth series:
//!
//! - **678 luni-solar terms** over the five Delaunay arguments
//! - **687 planetary terms** over the fourteen planetary arguments
//!
//! An evaluator sums the [`CoefficientTables`] it is given, truncated by its
//! [`NutationConfig`]. The complete model needs tables carrying every row;
//! the built-in tables only cover the IAU 2000B rows, so over them an
//! evaluator must be asked for a shorter series explicitly.
//!
//! ## Summation
//!
//! For each luni-solar row with multipliers `n` and argument
//! `arg = fmod(n · [l, l', F, D, Ω], 2π)`:
//!
//! ```text
//! Δψ += S sin(arg) + S' t sin(arg) + C cos(arg)
//! Δε += C cos(arg) + C' t cos(arg) + S sin(arg)
//! ```
//!
//! and for each planetary row `Δψ += S sin + C cos`, `Δε += S sin + C cos`.
//! Every product is added straight into the running total, row by row in
//! ascending table order and column by column within a row, in units of
//! 0.1 µas. This is the order of a flat row-major dot product; a BLAS-backed
//! `tensordot` may block the sum differently and differ in the last bits.
//! The planetary total is added to the luni-solar total once, and the result
//! is converted to radians at the end.
//!
//! ## Reference
//!
//! - IERS Conventions (2003), Chapter 5
//! - Mathews, Herring & Buffett (2002), J. Geophys. Res. 107, B4

use std::sync::Arc;

use super::fundamental_args::{fundamental_arguments_truncated, planetary_arguments};
use super::tables::CoefficientTables;
use super::types::{NutationResult, RawNutation};
use crate::config::NutationConfig;
use crate::constants::TWOPI;
use crate::errors::AstroResult;
use crate::math::{fmod, sincos};
use crate::utils::jd_to_centuries;

/// IAU 2000A nutation calculator.
///
/// Cheap to clone: the coefficient tables are shared.
///
/// # Example
///
/// ```
/// use celestial_nutation::nutation::{CoefficientTables, NutationIAU2000A};
/// use celestial_nutation::NutationConfig;
///
/// // The built-in tables do not carry the complete series.
/// assert!(NutationIAU2000A::new(CoefficientTables::builtin()).is_err());
///
/// let config = NutationConfig {
///     lunisolar_terms: 77,
///     planetary_terms: 0,
///     ..NutationConfig::default()
/// };
/// let nut = NutationIAU2000A::with_config(CoefficientTables::builtin(), config).unwrap();
/// let result = nut.compute(2451545.0, 0.0);
/// assert!(result.delta_psi.abs() < 1e-4);
/// assert!(result.delta_eps.abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct NutationIAU2000A {
    tables: Arc<CoefficientTables>,
    config: NutationConfig,
}

impl NutationIAU2000A {
    /// Evaluator for the complete model over `tables`.
    ///
    /// Fails unless `tables` carries every IAU 2000A row. Use
    /// [`with_config`](Self::with_config) to sum a shorter series on purpose.
    pub fn new(tables: Arc<CoefficientTables>) -> AstroResult<Self> {
        Self::with_config(tables, NutationConfig::default())
    }

    /// Evaluator over `tables` truncated by `config`.
    ///
    /// Fails if `config` is out of range or asks for more rows than `tables`
    /// holds.
    pub fn with_config(tables: Arc<CoefficientTables>, config: NutationConfig) -> AstroResult<Self> {
        config.validate()?;
        config.check_rows(tables.lunisolar().len(), tables.planetary().len())?;
        Ok(Self { tables, config })
    }

    /// The built-in tables under the IAU 2000B truncation, which they always
    /// cover.
    pub(crate) fn iau2000b_series() -> Self {
        Self {
            tables: CoefficientTables::builtin(),
            config: NutationConfig::iau2000b(),
        }
    }

    /// The truncation in effect.
    pub fn config(&self) -> &NutationConfig {
        &self.config
    }

    pub fn tables(&self) -> &Arc<CoefficientTables> {
        &self.tables
    }

    /// Nutation for a two-part Julian Date (TT), in radians.
    pub fn compute(&self, jd1: f64, jd2: f64) -> NutationResult {
        self.compute_centuries(jd_to_centuries(jd1, jd2))
    }

    /// Nutation for `t` Julian centuries since J2000.0, in radians.
    pub fn compute_centuries(&self, t: f64) -> NutationResult {
        self.compute_raw(t).to_radians()
    }

    /// Both series summed, in 0.1 µas.
    pub fn compute_raw(&self, t: f64) -> RawNutation {
        let args = fundamental_arguments_truncated(t, self.config.fundamental_argument_terms);
        self.compute_lunisolar(&args, t) + self.compute_planetary(t)
    }

    /// The luni-solar series for the given `[l, l', F, D, Ω]`, in 0.1 µas.
    pub fn compute_lunisolar(&self, args: &[f64; 5], t: f64) -> RawNutation {
        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in &self.tables.lunisolar()[..self.config.lunisolar_terms] {
            let arg = fmod(dot(&term.multipliers, args), TWOPI);
            let (sarg, carg) = sincos(arg);

            let [sp, spt, cp] = term.longitude;
            let [ce, cet, se] = term.obliquity;
            dpsi += sp * sarg;
            dpsi += spt * (t * sarg);
            dpsi += cp * carg;
            deps += ce * carg;
            deps += cet * (t * carg);
            deps += se * sarg;
        }

        RawNutation { dpsi, deps }
    }

    /// The planetary series, in 0.1 µas. Zero when no planetary rows are
    /// configured or loaded.
    pub fn compute_planetary(&self, t: f64) -> RawNutation {
        let terms = &self.tables.planetary()[..self.config.planetary_terms];
        if terms.is_empty() {
            return RawNutation::default();
        }

        let args = planetary_arguments(t);
        let mut dpsi = 0.0;
        let mut deps = 0.0;

        for term in terms {
            let arg = fmod(dot(&term.multipliers, &args), TWOPI);
            let (sarg, carg) = sincos(arg);

            dpsi += term.longitude[0] * sarg;
            dpsi += term.longitude[1] * carg;
            deps += term.obliquity[0] * sarg;
            deps += term.obliquity[1] * carg;
        }

        RawNutation { dpsi, deps }
    }
}

#[inline]
fn dot<const N: usize>(multipliers: &[i8; N], args: &[f64; N]) -> f64 {
    multipliers
        .iter()
        .zip(args.iter())
        .map(|(&n, &a)| f64::from(n) * a)
        .sum()
}

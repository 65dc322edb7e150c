//! Series truncation settings.
//!
//! A [`NutationConfig`] decides how much of the IAU 2000A model is evaluated:
//! the number of polynomial coefficients used for each fundamental argument,
//! and how many rows of each series are summed. The defaults evaluate the
//! complete model; [`NutationConfig::iau2000b`] reproduces the truncated
//! IAU 2000B series.
//!
//! Configurations are plain data and can be read from any serde format:
//!
//! ```
//! use celestial_nutation::config::NutationConfig;
//!
//! let config: NutationConfig = serde_json::from_str(
//!     r#"{ "fundamental_argument_terms": 5, "lunisolar_terms": 300, "planetary_terms": 0 }"#,
//! ).unwrap();
//! assert_eq!(config.lunisolar_terms, 300);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    IAU2000A_LUNISOLAR_TERMS, IAU2000A_PLANETARY_TERMS, IAU2000B_LUNISOLAR_TERMS,
};
use crate::errors::{AstroError, AstroResult};

/// Highest number of polynomial coefficients per fundamental argument.
pub const MAX_FUNDAMENTAL_ARGUMENT_TERMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutationConfig {
    /// Polynomial coefficients used per fundamental argument (1..=5).
    pub fundamental_argument_terms: usize,
    /// Leading luni-solar rows to sum.
    pub lunisolar_terms: usize,
    /// Leading planetary rows to sum. Zero skips the planetary series.
    pub planetary_terms: usize,
}

impl Default for NutationConfig {
    fn default() -> Self {
        Self::iau2000a()
    }
}

impl NutationConfig {
    /// The complete IAU 2000A model.
    pub const fn iau2000a() -> Self {
        Self {
            fundamental_argument_terms: MAX_FUNDAMENTAL_ARGUMENT_TERMS,
            lunisolar_terms: IAU2000A_LUNISOLAR_TERMS,
            planetary_terms: IAU2000A_PLANETARY_TERMS,
        }
    }

    /// The IAU 2000B truncation: linear arguments, 77 luni-solar rows, no
    /// planetary rows.
    pub const fn iau2000b() -> Self {
        Self {
            fundamental_argument_terms: 2,
            lunisolar_terms: IAU2000B_LUNISOLAR_TERMS,
            planetary_terms: 0,
        }
    }

    pub fn validate(&self) -> AstroResult<()> {
        if !(1..=MAX_FUNDAMENTAL_ARGUMENT_TERMS).contains(&self.fundamental_argument_terms) {
            return Err(AstroError::invalid_config(
                "fundamental_argument_terms",
                &format!(
                    "{} is outside 1..={}",
                    self.fundamental_argument_terms, MAX_FUNDAMENTAL_ARGUMENT_TERMS
                ),
            ));
        }
        if self.lunisolar_terms == 0 {
            return Err(AstroError::invalid_config(
                "lunisolar_terms",
                "at least one luni-solar row is required",
            ));
        }
        Ok(())
    }

    /// Checks that tables with the given row counts cover this configuration.
    ///
    /// Asking for more rows than the tables hold is an error rather than a
    /// silent truncation: a shorter series is a different model.
    pub fn check_rows(&self, lunisolar_rows: usize, planetary_rows: usize) -> AstroResult<()> {
        if self.lunisolar_terms > lunisolar_rows {
            return Err(AstroError::invalid_config(
                "lunisolar_terms",
                &format!(
                    "{} rows requested, tables hold {}",
                    self.lunisolar_terms, lunisolar_rows
                ),
            ));
        }
        if self.planetary_terms > planetary_rows {
            return Err(AstroError::invalid_config(
                "planetary_terms",
                &format!(
                    "{} rows requested, tables hold {}",
                    self.planetary_terms, planetary_rows
                ),
            ));
        }
        debug!(
            "nutation config uses {}/{} luni-solar and {}/{} planetary rows",
            self.lunisolar_terms, lunisolar_rows, self.planetary_terms, planetary_rows
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_model() {
        let config = NutationConfig::default();
        assert_eq!(config.fundamental_argument_terms, 5);
        assert_eq!(config.lunisolar_terms, 678);
        assert_eq!(config.planetary_terms, 687);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_iau2000b_preset() {
        let config = NutationConfig::iau2000b();
        assert_eq!(config.fundamental_argument_terms, 2);
        assert_eq!(config.lunisolar_terms, 77);
        assert_eq!(config.planetary_terms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_argument_terms_out_of_range() {
        for terms in [0, 6, 100] {
            let config = NutationConfig {
                fundamental_argument_terms: terms,
                ..NutationConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, AstroError::InvalidConfig { .. }));
        }
    }

    #[test]
    fn test_rejects_empty_lunisolar_series() {
        let config = NutationConfig {
            lunisolar_terms: 0,
            ..NutationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_rows_beyond_tables() {
        let err = NutationConfig::default().check_rows(77, 0).unwrap_err();
        match err {
            AstroError::InvalidConfig { parameter, message } => {
                assert_eq!(parameter, "lunisolar_terms");
                assert!(message.contains("678 rows requested, tables hold 77"));
            }
            other => panic!("unexpected error: {}", other),
        }

        let config = NutationConfig {
            lunisolar_terms: 77,
            ..NutationConfig::default()
        };
        let err = config.check_rows(77, 0).unwrap_err();
        assert!(err.to_string().contains("planetary_terms"));
    }

    #[test]
    fn test_accepts_rows_within_tables() {
        assert!(NutationConfig::iau2000b().check_rows(77, 0).is_ok());
        assert!(NutationConfig::iau2000b().check_rows(678, 687).is_ok());
        assert!(NutationConfig::default().check_rows(678, 687).is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: NutationConfig =
            serde_json::from_str(r#"{ "planetary_terms": 0 }"#).unwrap();
        assert_eq!(config.fundamental_argument_terms, 5);
        assert_eq!(config.lunisolar_terms, 678);
        assert_eq!(config.planetary_terms, 0);
    }
}

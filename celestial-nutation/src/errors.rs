//! Error types for nutation evaluation.
//!
//! Evaluating a series never fails: the computation is total over finite input
//! and non-finite input simply propagates. Errors only arise while *building*
//! an evaluator, i.e. when coefficient tables are loaded or a configuration
//! is checked.
//!
//! | Variant | Raised by | Recoverable? |
//! |---------|-----------|--------------|
//! | [`MalformedTable`](AstroError::MalformedTable) | Coefficient table validation | No |
//! | [`InvalidConfig`](AstroError::InvalidConfig) | [`NutationConfig::validate`](crate::config::NutationConfig::validate) | No |
//! | [`DataError`](AstroError::DataError) | File I/O, JSON decoding | Yes |

use thiserror::Error;

/// Unified error type for table loading and evaluator construction.
#[derive(Error, Debug)]
pub enum AstroError {
    /// Coefficient data with the wrong shape or non-representable values.
    ///
    /// Fatal: a table that fails validation is never handed to an evaluator.
    #[error("Malformed coefficient table {table}: {message}")]
    MalformedTable { table: String, message: String },

    /// Evaluator configuration outside its valid range.
    #[error("Invalid configuration for {parameter}: {message}")]
    InvalidConfig { parameter: String, message: String },

    /// Data access failure (file I/O, parsing).
    #[error("Data error ({file_type} - {operation}): {message}")]
    DataError {
        file_type: String,
        operation: String,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MalformedTable`](Self::MalformedTable) error.
    pub fn malformed_table(table: &str, reason: &str) -> Self {
        Self::MalformedTable {
            table: table.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidConfig`](Self::InvalidConfig) error.
    pub fn invalid_config(parameter: &str, reason: &str) -> Self {
        Self::InvalidConfig {
            parameter: parameter.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`DataError`](Self::DataError) (the only recoverable variant).
    pub fn data_error(file_type: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            file_type: file_type.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying with another source might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_table_error() {
        let err = AstroError::malformed_table("nals_t", "row 3 has 4 columns, expected 5");
        assert_eq!(
            err.to_string(),
            "Malformed coefficient table nals_t: row 3 has 4 columns, expected 5"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let err = AstroError::invalid_config("fundamental_argument_terms", "must be 1..=5");
        assert!(err.to_string().contains("fundamental_argument_terms"));
        assert!(err.to_string().contains("must be 1..=5"));
    }

    #[test]
    fn test_data_error() {
        let err = AstroError::data_error("coefficient dump", "read", "file not found");
        assert!(err
            .to_string()
            .contains("Data error (coefficient dump - read)"));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(AstroError::data_error("coefficient dump", "read", "timeout").is_recoverable());
        assert!(!AstroError::malformed_table("napl_t", "empty").is_recoverable());
        assert!(!AstroError::invalid_config("lunisolar_terms", "zero").is_recoverable());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}

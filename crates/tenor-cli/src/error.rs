//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unsupported coupon frequency.
    #[error("Invalid frequency: {0}. Use 1, 2, 4, or 12.")]
    InvalidFrequency(u32),

    /// Argument outside its valid range.
    #[error("Invalid {name}: {value}. {expected}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Value supplied.
        value: f64,
        /// What was expected.
        expected: &'static str,
    },

    /// Two lists that must pair up have different lengths.
    #[error("{left} and {right} must have the same number of values ({left_len} vs {right_len})")]
    LengthMismatch {
        /// First argument name.
        left: &'static str,
        /// Second argument name.
        right: &'static str,
        /// Values in the first list.
        left_len: usize,
        /// Values in the second list.
        right_len: usize,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// File being loaded.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

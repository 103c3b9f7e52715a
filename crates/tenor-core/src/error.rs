//! Error types for the Tenor core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core building blocks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Malformed input: mismatched lengths, inverted ranges, bad dates.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A convention that is recognised but not implemented.
    #[error("Unsupported convention: {convention}")]
    UnsupportedConvention {
        /// The convention that was requested.
        convention: String,
    },
}

impl CoreError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported(convention: impl Into<String>) -> Self {
        Self::UnsupportedConvention {
            convention: convention.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_input("stop point must be after start");
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_unsupported_display() {
        let err = CoreError::unsupported("clean price");
        assert_eq!(err.to_string(), "Unsupported convention: clean price");
    }
}

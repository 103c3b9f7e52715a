//! Error types for bond operations.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_curves::CurveError;
use tenor_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Price type, yield convention or frequency the calculation does not support.
    #[error("Unsupported convention: {convention}")]
    UnsupportedConvention {
        /// The rejected convention.
        convention: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Solver or interpolation error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Curve error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
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

    /// Converts a core error, surfacing unsupported conventions at bond level.
    #[must_use]
    pub fn from_core(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedConvention { convention } => {
                Self::UnsupportedConvention { convention }
            }
            other => Self::Core(other),
        }
    }

    /// True when a solver bracket did not contain the root.
    #[must_use]
    pub fn is_not_bracketed(&self) -> bool {
        matches!(
            self,
            Self::Math(MathError::RootNotBracketed { .. })
                | Self::Curve(CurveError::Math(MathError::RootNotBracketed { .. }))
        )
    }
}

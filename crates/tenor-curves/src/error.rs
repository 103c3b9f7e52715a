//! Error types for curve operations.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Curve has no data points.
    #[error("Curve has no data")]
    EmptyCurve,

    /// Malformed curve data.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of the problem.
        reason: String,
    },

    /// Pillars are not strictly increasing.
    #[error("Non-monotonic pillars at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonic {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous pillar.
        prev: f64,
        /// Current pillar.
        current: f64,
    },

    /// Requested point is outside the curve's coverage.
    #[error("Point {requested:.4} out of range [{min:.4}, {max:.4}]")]
    OutOfRange {
        /// The requested maturity or date.
        requested: f64,
        /// Earliest valid point.
        min: f64,
        /// Latest valid point.
        max: f64,
    },

    /// Requested date lies after the last index fixing and no extrapolation was asked for.
    #[error("Date {requested:.4} is beyond index data ending at {last:.4}")]
    BeyondData {
        /// The requested date.
        requested: f64,
        /// Date of the last fixing.
        last: f64,
    },

    /// Operation only supports whole-year maturities.
    #[error("Non-integer maturity {maturity} not supported")]
    NonIntegerMaturity {
        /// The requested maturity.
        maturity: f64,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Mathematical error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }
}

//! Root-finding algorithms.
//!
//! Every inversion in Tenor (yield from price, par coupon from a curve,
//! breakeven inflation from a linker price) is a monotone objective solved
//! by [`bisection`]. The caller states whether the objective rises or falls
//! with its argument through [`Monotonicity`], and the bracket is validated
//! before the first halving.
//!
//! # Example: Yield from price
//!
//! ```rust
//! use tenor_math::solvers::{bisection, Bracket, Monotonicity, SolverConfig};
//!
//! // 5-year 5% annual bond trading at 95
//! let price = |y: f64| {
//!     (1..=5).map(|t| 5.0 / (1.0 + y).powi(t)).sum::<f64>() + 100.0 / (1.0 + y).powi(5)
//! };
//!
//! let bracket = Bracket::new(0.0, 0.25).unwrap();
//! let config = SolverConfig::default().with_tolerance(1e-8);
//! let result = bisection(|y| price(y) - 95.0, bracket, Monotonicity::Decreasing, &config).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod bisection;

pub use bisection::bisection;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Bracket width at which the search stops.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be positive"));
        }
        Ok(())
    }
}

/// An ordered search interval `[lo, hi]` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Bracket {
    lo: f64,
    hi: f64,
}

impl Bracket {
    /// Creates a bracket, failing with [`MathError::InvalidBracket`] unless `lo < hi`.
    pub fn new(lo: f64, hi: f64) -> MathResult<Self> {
        // Written this way so NaN bounds are rejected too.
        if !(lo < hi) {
            return Err(MathError::InvalidBracket { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Interval midpoint.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
}

impl TryFrom<(f64, f64)> for Bracket {
    type Error = MathError;

    fn try_from((lo, hi): (f64, f64)) -> MathResult<Self> {
        Self::new(lo, hi)
    }
}

impl From<Bracket> for (f64, f64) {
    fn from(bracket: Bracket) -> Self {
        (bracket.lo, bracket.hi)
    }
}

/// Direction in which an objective moves as its argument increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Monotonicity {
    /// Objective increases with its argument (coupon → price, inflation → NPV).
    Increasing,
    /// Objective decreases with its argument (yield → price).
    Decreasing,
}

impl Monotonicity {
    /// Sign that turns an objective of this direction into an increasing one.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Monotonicity::Increasing => 1.0,
            Monotonicity::Decreasing => -1.0,
        }
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

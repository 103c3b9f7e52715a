//! Economic breakeven inflation solver.
//!
//! Finds the constant annual inflation rate that, used to project the index
//! past its last fixing, equates a linker's indexed cash flows discounted
//! off a nominal zero curve to its market price. Higher inflation means
//! larger cash flows, so the objective is increasing in the rate.

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::types::PriceType;
use tenor_curves::ZeroCurve;
use tenor_math::solvers::{bisection, Bracket, Monotonicity, SolverConfig, DEFAULT_MAX_ITERATIONS};

use crate::error::{BondError, BondResult};
use crate::instruments::InflationLinkedBond;

/// Default search bracket for breakeven inflation.
pub const DEFAULT_BREAKEVEN_BRACKET: (f64, f64) = (-0.05, 0.10);

/// Default breakeven tolerance.
pub const DEFAULT_BREAKEVEN_TOLERANCE: f64 = 1e-5;

/// Result of a breakeven calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakevenResult {
    /// Breakeven inflation rate (0.02 for 2% a year).
    pub rate: f64,
    /// Number of bisection steps.
    pub iterations: u32,
    /// Value error at the returned rate.
    pub residual: f64,
}

/// Economic breakeven inflation solver.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::prelude::*;
///
/// let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
/// let linker = InflationLinkedBond::new(10.0, 0.04, Frequency::Annual, 0.0).unwrap();
///
/// let result = BreakevenSolver::new()
///     .solve(&linker, 0.0, 100.0, PriceType::Dirty, &curve)
///     .unwrap();
/// assert!((result.rate - 0.018).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakevenSolver {
    bracket: (f64, f64),
    config: SolverConfig,
}

impl Default for BreakevenSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakevenSolver {
    /// Creates a solver with the default bracket `[-0.05, 0.10]` and
    /// tolerance `1e-5`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bracket: DEFAULT_BREAKEVEN_BRACKET,
            config: SolverConfig::new(DEFAULT_BREAKEVEN_TOLERANCE, DEFAULT_MAX_ITERATIONS),
        }
    }

    /// Sets the search bracket. It is validated when solving.
    #[must_use]
    pub fn with_bracket(mut self, lo: f64, hi: f64) -> Self {
        self.bracket = (lo, hi);
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Solves for the breakeven inflation rate.
    ///
    /// Discount factors depend only on the curve, so they are computed once
    /// before the search.
    ///
    /// # Errors
    ///
    /// - [`BondError::UnsupportedConvention`] for a clean price
    /// - [`BondError::InvalidSpec`] if no cash flows remain after `now`
    /// - [`BondError::Curve`] if a payment falls past the curve or before the
    ///   first index fixing
    /// - [`BondError::Math`] wrapping `InvalidBracket` or `RootNotBracketed`
    pub fn solve(
        &self,
        linker: &InflationLinkedBond,
        now: f64,
        price: f64,
        price_type: PriceType,
        curve: &ZeroCurve,
    ) -> BondResult<BreakevenResult> {
        price_type.require_dirty().map_err(BondError::from_core)?;
        let bracket = Bracket::try_from(self.bracket)?;

        let schedule = linker.bond().cash_flows(now)?;
        if schedule.is_empty() {
            return Err(BondError::invalid_spec(format!(
                "no cash flows remain after {now}"
            )));
        }
        linker.check_indexable(&schedule)?;

        let discounted = schedule
            .iter()
            .map(|(t, cf)| -> BondResult<(f64, f64)> {
                Ok((t, cf * curve.discount_factor_at(t)?))
            })
            .collect::<BondResult<Vec<(f64, f64)>>>()?;

        let npv = |inflation: f64| -> f64 {
            discounted
                .iter()
                .map(|&(t, pv)| {
                    // Cannot fail: every date was checked above
                    pv * linker.index_ratio(t, inflation).unwrap_or(f64::NAN)
                })
                .sum()
        };

        let result = bisection(
            |inflation| npv(inflation) - price,
            bracket,
            Monotonicity::Increasing,
            &self.config,
        )?;

        debug!(
            "breakeven inflation {:.6} for price {:.4} ({} iterations)",
            result.root, price, result.iterations
        );

        Ok(BreakevenResult {
            rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

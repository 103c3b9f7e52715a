//! Yield-to-maturity solver.
//!
//! Inverts [`Bond::price`](crate::traits::Bond::price) for a coupon bond by
//! bisection. Price falls as yield rises, so the objective is solved as a
//! decreasing function. The search runs on the annual effective rate and
//! the root is converted back to the bond's own compounding at the end.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
//! let result = YieldSolver::new()
//!     .with_tolerance(1e-8)
//!     .solve(&bond, 0.0, 100.0, PriceType::Dirty, YieldConvention::Bond)
//!     .unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-7);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::discounting::discount_factor;
use tenor_core::types::{PriceType, YieldConvention};
use tenor_math::solvers::{bisection, Bracket, Monotonicity, SolverConfig, DEFAULT_MAX_ITERATIONS};

use crate::error::{BondError, BondResult};
use crate::instruments::CouponBond;
use crate::traits::check_quote;

/// Default search bracket for yields, as annual effective rates.
pub const DEFAULT_YIELD_BRACKET: (f64, f64) = (0.0, 0.25);

/// Default yield tolerance.
pub const DEFAULT_YIELD_TOLERANCE: f64 = 1e-6;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The yield in the bond's own convention (0.05 for 5%).
    pub yield_value: f64,
    /// Number of bisection steps.
    pub iterations: u32,
    /// Price error at the returned yield.
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    bracket: (f64, f64),
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with the default bracket `[0, 0.25]` and tolerance `1e-6`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bracket: DEFAULT_YIELD_BRACKET,
            config: SolverConfig::new(DEFAULT_YIELD_TOLERANCE, DEFAULT_MAX_ITERATIONS),
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

    /// Solver settings.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield at which `bond` is worth `price`.
    ///
    /// # Errors
    ///
    /// - [`BondError::UnsupportedConvention`] for a clean price or a
    ///   non-bond yield convention
    /// - [`BondError::InvalidSpec`] if no cash flows remain after `now`
    /// - [`BondError::Math`] wrapping `InvalidBracket` or `RootNotBracketed`
    pub fn solve(
        &self,
        bond: &CouponBond,
        now: f64,
        price: f64,
        price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<YieldResult> {
        check_quote(price_type, convention)?;
        let bracket = Bracket::try_from(self.bracket)?;

        // One schedule serves every iteration.
        let schedule = bond.cash_flows(now)?;
        if schedule.is_empty() {
            return Err(BondError::invalid_spec(format!(
                "no cash flows remain after {now} for a bond maturing at {}",
                bond.maturity()
            )));
        }

        let result = bisection(
            |rate| schedule.present_value(|t| discount_factor(t, rate)) - price,
            bracket,
            Monotonicity::Decreasing,
            &self.config,
        )?;

        let yield_value = bond.bond_yield(result.root);
        debug!(
            "yield {:.6} for price {:.4} ({} iterations)",
            yield_value, price, result.iterations
        );

        Ok(YieldResult {
            yield_value,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::types::Frequency;
    use tenor_math::MathError;

    use crate::traits::Bond;

    const DIRTY: PriceType = PriceType::Dirty;
    const BOND: YieldConvention = YieldConvention::Bond;

    #[test]
    fn test_round_trip_annual() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::Annual).unwrap();
        let result = YieldSolver::new()
            .solve(&bond, 0.0, 93.9253, DIRTY, BOND)
            .unwrap();
        assert_relative_eq!(result.yield_value, 0.12, epsilon = 1e-5);
        assert!(result.iterations <= 18);
    }

    #[test]
    fn test_semi_annual_converted_back() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::SemiAnnual).unwrap();
        let result = YieldSolver::new()
            .with_tolerance(1e-9)
            .solve(&bond, 0.0, 106.7327, DIRTY, BOND)
            .unwrap();
        assert_relative_eq!(result.yield_value, 0.08, epsilon = 1e-5);
    }

    #[test]
    fn test_mid_period_valuation() {
        let bond = CouponBond::new(5.0, 0.06, Frequency::SemiAnnual).unwrap();
        let price = bond.price(0.045, 0.3, DIRTY, BOND).unwrap();
        let y = YieldSolver::new()
            .with_tolerance(1e-9)
            .solve(&bond, 0.3, price, DIRTY, BOND)
            .unwrap()
            .yield_value;
        assert_relative_eq!(y, 0.045, epsilon = 1e-7);
    }

    #[test]
    fn test_price_outside_bracket() {
        // 100 only reachable at a 5% yield
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        let result = YieldSolver::new()
            .with_bracket(0.06, 0.25)
            .solve(&bond, 0.0, 100.0, DIRTY, BOND);
        assert!(result.as_ref().is_err_and(BondError::is_not_bracketed));
    }

    #[test]
    fn test_inverted_bracket() {
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        let result = YieldSolver::new()
            .with_bracket(0.25, 0.0)
            .solve(&bond, 0.0, 100.0, DIRTY, BOND);
        assert!(matches!(
            result,
            Err(BondError::Math(MathError::InvalidBracket { .. }))
        ));
    }

    #[test]
    fn test_clean_price_rejected() {
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        assert!(matches!(
            YieldSolver::new().solve(&bond, 0.0, 100.0, PriceType::Clean, BOND),
            Err(BondError::UnsupportedConvention { .. })
        ));
    }

    #[test]
    fn test_matured_bond() {
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        assert!(matches!(
            YieldSolver::new().solve(&bond, 2.0, 100.0, DIRTY, BOND),
            Err(BondError::InvalidSpec { .. })
        ));
    }
}

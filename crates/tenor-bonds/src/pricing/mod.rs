//! Bond pricing solvers.
//!
//! - [`YieldSolver`]: Yield-to-maturity from a dirty price
//! - [`BreakevenSolver`]: Economic breakeven inflation for a linker
//!
//! Both wrap the monotone bisection in `tenor_math::solvers`, validate their
//! bracket before the first step, and build the cash-flow schedule once per
//! solve.

mod breakeven;
mod yield_solver;

pub use breakeven::{
    BreakevenResult, BreakevenSolver, DEFAULT_BREAKEVEN_BRACKET, DEFAULT_BREAKEVEN_TOLERANCE,
};
pub use yield_solver::{
    YieldResult, YieldSolver, DEFAULT_YIELD_BRACKET, DEFAULT_YIELD_TOLERANCE,
};

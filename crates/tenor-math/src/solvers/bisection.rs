//! Bisection root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, Monotonicity, SolverConfig, SolverResult};

/// Bisection root-finding for a monotone objective.
///
/// Finds `x` in `bracket` with `f(x) = 0`, where `f` moves in the stated
/// `monotonicity` direction. The objective is usually "model value minus
/// target", so the root is the argument that reproduces the target.
///
/// At each step the objective is evaluated at the midpoint. When the
/// midpoint overshoots the target the midpoint becomes the new upper bound,
/// otherwise the new lower bound. The search stops once the bracket width is
/// at most `config.tolerance` and returns the last midpoint evaluated.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if the configuration is unusable
/// - [`MathError::RootNotBracketed`] if `f` does not straddle zero across the
///   bracket in the stated direction
/// - [`MathError::ConvergenceFailed`] if the iteration cap is hit first
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, Bracket, Monotonicity, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let bracket = Bracket::new(1.0, 2.0).unwrap();
/// let result = bisection(f, bracket, Monotonicity::Increasing, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(
    f: F,
    bracket: Bracket,
    monotonicity: Monotonicity,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let sign = monotonicity.sign();
    let mut lo = bracket.lo();
    let mut hi = bracket.hi();

    let f_lo = f(lo);
    let f_hi = f(hi);

    // Oriented so that the objective rises from <= 0 at lo to >= 0 at hi.
    if !(sign * f_lo <= 0.0 && sign * f_hi >= 0.0) {
        return Err(MathError::RootNotBracketed { lo, hi, f_lo, f_hi });
    }

    let mut mid = bracket.midpoint();
    let mut residual = None;
    let mut iterations = 0;

    while hi - lo > config.tolerance {
        if iterations >= config.max_iterations {
            let residual = residual.unwrap_or_else(|| f(mid));
            warn!(
                "bisection hit {} iterations with bracket [{}, {}] still wider than {}",
                iterations, lo, hi, config.tolerance
            );
            return Err(MathError::convergence_failed(iterations, residual));
        }

        mid = (lo + hi) / 2.0;
        let f_mid = f(mid);
        trace!("bisection step {}: f({}) = {}", iterations, mid, f_mid);

        if sign * f_mid > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        residual = Some(f_mid);
        iterations += 1;
    }

    let residual = residual.unwrap_or_else(|| f(mid));
    debug!(
        "bisection converged to {} in {} iterations (residual {:.3e})",
        mid, iterations, residual
    );

    Ok(SolverResult {
        root: mid,
        iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let bracket = Bracket::new(1.0, 2.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Increasing, &config()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_decreasing_objective() {
        let f = |x: f64| 1.0 - x;
        let bracket = Bracket::new(0.0, 3.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Decreasing, &config()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wrong_direction_is_not_bracketed() {
        // Increasing function declared as decreasing
        let f = |x: f64| x - 1.0;
        let bracket = Bracket::new(0.0, 2.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Decreasing, &config());

        assert!(matches!(result, Err(MathError::RootNotBracketed { .. })));
    }

    #[test]
    fn test_root_outside_bracket() {
        let f = |x: f64| x * x - 2.0;
        let bracket = Bracket::new(2.0, 3.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Increasing, &config());

        if let Err(MathError::RootNotBracketed { f_lo, f_hi, .. }) = result {
            assert_relative_eq!(f_lo, 2.0);
            assert_relative_eq!(f_hi, 7.0);
        } else {
            panic!("Expected RootNotBracketed error");
        }
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 1.0;
        let bracket = Bracket::new(0.0, 1.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Increasing, &config()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;
        let bracket = Bracket::new(-2.0, 0.0).unwrap();

        let result = bisection(f, bracket, Monotonicity::Increasing, &config()).unwrap();

        assert_relative_eq!(result.root, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_iteration_count_matches_halvings() {
        // Width 0.25 down to 1e-6 takes ceil(log2(250_000)) = 18 halvings
        let f = |x: f64| 0.07 - x;
        let bracket = Bracket::new(0.0, 0.25).unwrap();
        let config = SolverConfig::new(1e-6, 100);

        let result = bisection(f, bracket, Monotonicity::Decreasing, &config).unwrap();

        assert_eq!(result.iterations, 18);
        assert!((result.root - 0.07).abs() <= 1e-6);
    }

    #[test]
    fn test_iteration_cap() {
        let f = |x: f64| x - 0.3;
        let bracket = Bracket::new(0.0, 1.0).unwrap();
        let config = SolverConfig::new(1e-12, 5);

        let result = bisection(f, bracket, Monotonicity::Increasing, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 5, .. })
        ));
    }

    #[test]
    fn test_bracket_already_within_tolerance() {
        let f = |x: f64| x - 0.5;
        let bracket = Bracket::new(0.4999, 0.5001).unwrap();
        let config = SolverConfig::new(1e-3, 10);

        let result = bisection(f, bracket, Monotonicity::Increasing, &config).unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 0.5, epsilon = 1e-12);
    }
}

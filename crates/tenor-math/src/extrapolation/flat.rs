//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - constant value from the boundary point.
///
/// The zero curve uses this at its short end: any maturity at or before the
/// first pillar takes the first pillar's rate.
///
/// # Example
///
/// ```rust
/// use tenor_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let extrap = FlatExtrapolator;
/// let rate = extrap.extrapolate(15.0, 10.0, 0.05, 0.001);
/// assert_eq!(rate, 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl FlatExtrapolator {
    /// Creates a new flat extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _last_t: f64, last_value: f64, _last_derivative: f64) -> f64 {
        last_value
    }
}

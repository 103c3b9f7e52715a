//! Constant-rate compounding extrapolation.

use super::Extrapolator;

/// Projects a level forward at a constant annual rate.
///
/// `value(t) = last_value * (1 + rate)^(t - last_t)`
///
/// Used to carry an inflation index past its last published fixing at an
/// assumed inflation rate.
///
/// # Example
///
/// ```rust
/// use tenor_math::extrapolation::{CompoundingExtrapolator, Extrapolator};
///
/// let extrap = CompoundingExtrapolator::new(0.02);
/// let level = extrap.extrapolate(1.0, 0.0, 100.0, 0.0);
/// assert!((level - 102.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundingExtrapolator {
    rate: f64,
}

impl CompoundingExtrapolator {
    /// Creates an extrapolator growing at `rate` per year.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Annual growth rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Extrapolator for CompoundingExtrapolator {
    fn extrapolate(&self, t: f64, last_t: f64, last_value: f64, _last_derivative: f64) -> f64 {
        last_value * (1.0 + self.rate).powf(t - last_t)
    }
}

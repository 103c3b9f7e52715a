//! Extrapolation methods for extending curves beyond their data.
//!
//! - [`FlatExtrapolator`]: Constant extension from the boundary point
//! - [`CompoundingExtrapolator`]: Growth at a constant annual rate
//!
//! Lookups choose their behaviour beyond the data through an explicit
//! [`ExtrapolationPolicy`] argument rather than state stored on the curve,
//! so one curve can serve concurrent lookups under different policies.
//!
//! # Example
//!
//! ```rust
//! use tenor_math::extrapolation::ExtrapolationPolicy;
//!
//! // Index level 100 at t=1, projected forward at 2% a year
//! let policy = ExtrapolationPolicy::Compounding { rate: 0.02 };
//! let level = policy.extrapolate(3.0, 1.0, 100.0, 0.0).unwrap();
//! assert!((level - 104.04).abs() < 1e-10);
//!
//! assert!(ExtrapolationPolicy::Strict.extrapolate(3.0, 1.0, 100.0, 0.0).is_none());
//! ```

mod compounding;
mod flat;

pub use compounding::CompoundingExtrapolator;
pub use flat::FlatExtrapolator;

use serde::{Deserialize, Serialize};

/// Trait for extrapolation methods.
///
/// Extrapolators extend curves beyond their boundary point.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to time `t` given the boundary point.
    ///
    /// # Arguments
    ///
    /// * `t` - Target time for extrapolation
    /// * `last_t` - Time of the boundary point
    /// * `last_value` - Value at the boundary point
    /// * `last_derivative` - Slope at the boundary point
    fn extrapolate(&self, t: f64, last_t: f64, last_value: f64, last_derivative: f64) -> f64;
}

/// What a lookup does for a point beyond the end of its data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ExtrapolationPolicy {
    /// No extrapolation: the lookup fails.
    #[default]
    Strict,
    /// Hold the boundary value constant.
    Flat,
    /// Grow the boundary value at a constant annualized rate.
    Compounding {
        /// Annual growth rate (0.02 = 2% a year).
        rate: f64,
    },
}

impl ExtrapolationPolicy {
    /// Extrapolates under this policy, `None` for [`ExtrapolationPolicy::Strict`].
    #[must_use]
    pub fn extrapolate(
        &self,
        t: f64,
        last_t: f64,
        last_value: f64,
        last_derivative: f64,
    ) -> Option<f64> {
        match *self {
            ExtrapolationPolicy::Strict => None,
            ExtrapolationPolicy::Flat => {
                Some(FlatExtrapolator.extrapolate(t, last_t, last_value, last_derivative))
            }
            ExtrapolationPolicy::Compounding { rate } => Some(
                CompoundingExtrapolator::new(rate).extrapolate(
                    t,
                    last_t,
                    last_value,
                    last_derivative,
                ),
            ),
        }
    }
}

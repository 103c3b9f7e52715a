//! Risk metrics for bonds.
//!
//! Durations and convexities here are effective measures: they bump the
//! yield either side of the base point and reprice, so they work for any
//! [`Bond`] without knowing its cash flows.

use serde::{Deserialize, Serialize};

use tenor_core::types::{PriceType, YieldConvention};

use crate::error::{BondError, BondResult};
use crate::traits::Bond;

/// One basis point.
pub const BASIS_POINT: f64 = 1e-4;

/// Price, duration and convexity of a bond at one yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Dirty price per 100 face.
    pub price: f64,
    /// Effective (or analytic) duration in years.
    pub duration: f64,
    /// Effective convexity.
    pub convexity: f64,
    /// Price change for a one basis point fall in yield.
    pub dv01: f64,
}

impl RiskMetrics {
    /// Calculates all risk metrics for a bond.
    pub fn calculate<B: Bond + ?Sized>(
        bond: &B,
        yield_value: f64,
        now: f64,
        convention: YieldConvention,
    ) -> BondResult<Self> {
        let price = bond.price(yield_value, now, PriceType::Dirty, convention)?;
        let duration = bond.duration(yield_value, now, convention)?;
        let convexity = bond.convexity(yield_value, now, convention)?;

        Ok(Self {
            price,
            duration,
            convexity,
            dv01: duration * price * BASIS_POINT,
        })
    }

    /// Second-order estimate of the price change for a yield move `dy`.
    #[must_use]
    pub fn estimate_price_change(&self, dy: f64) -> f64 {
        -self.duration * self.price * dy + 0.5 * self.convexity * self.price * dy * dy
    }
}

/// `(P(y - h) - P(y + h)) / (2 * P(y) * h)`
pub fn effective_duration<F>(price: F, yield_value: f64, bump: f64) -> BondResult<f64>
where
    F: Fn(f64) -> BondResult<f64>,
{
    let base = base_price(&price, yield_value)?;
    let up = price(yield_value + bump)?;
    let down = price(yield_value - bump)?;
    Ok((down - up) / (2.0 * base * bump))
}

/// `(P(y - h) + P(y + h) - 2 * P(y)) / (P(y) * h^2)`
pub fn effective_convexity<F>(price: F, yield_value: f64, bump: f64) -> BondResult<f64>
where
    F: Fn(f64) -> BondResult<f64>,
{
    let base = base_price(&price, yield_value)?;
    let up = price(yield_value + bump)?;
    let down = price(yield_value - bump)?;
    Ok((down + up - 2.0 * base) / (base * bump * bump))
}

fn base_price<F>(price: &F, yield_value: f64) -> BondResult<f64>
where
    F: Fn(f64) -> BondResult<f64>,
{
    let base = price(yield_value)?;
    if base == 0.0 || !base.is_finite() {
        return Err(BondError::invalid_spec(format!(
            "cannot measure risk around a price of {base}"
        )));
    }
    Ok(base)
}

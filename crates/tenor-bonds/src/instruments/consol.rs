//! Perpetual annual bond.

use serde::{Deserialize, Serialize};

use tenor_core::cashflows::PRICE_BASE;
use tenor_core::types::{PriceType, YieldConvention};

use crate::error::{BondError, BondResult};
use crate::traits::Bond;

/// A consol: an annual coupon forever, never redeemed.
///
/// Valuation assumes `now` is a coupon date (a whole year), where clean and
/// dirty prices coincide.
///
/// ```rust
/// use tenor_bonds::prelude::*;
///
/// let consol = Consol::new(0.02);
/// let price = consol
///     .price(0.04, 0.0, PriceType::Dirty, YieldConvention::Bond)
///     .unwrap();
/// assert!((price - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Consol {
    coupon: f64,
}

impl Consol {
    /// Creates a consol paying `coupon` per year.
    #[must_use]
    pub fn new(coupon: f64) -> Self {
        Self { coupon }
    }

    /// Coupon rate.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Yield at which the consol is worth `price`: `100 * coupon / price`.
    pub fn yield_from_price(
        &self,
        now: f64,
        price: f64,
        convention: YieldConvention,
    ) -> BondResult<f64> {
        if !(price > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "consol price must be positive, got {price}"
            )));
        }
        let yield_value = PRICE_BASE * self.coupon / price;
        self.check(yield_value, now, convention)?;
        Ok(yield_value)
    }

    fn check(&self, yield_value: f64, now: f64, convention: YieldConvention) -> BondResult<()> {
        convention.require_bond().map_err(BondError::from_core)?;
        if now.fract() != 0.0 {
            return Err(BondError::invalid_spec(format!(
                "consol valuation date {now} is not a coupon date"
            )));
        }
        if !(yield_value > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "consol yield must be positive, got {yield_value}"
            )));
        }
        Ok(())
    }
}

impl Bond for Consol {
    /// `100 * coupon / yield`. On a coupon date either price type gives the
    /// same number.
    fn price(
        &self,
        yield_value: f64,
        now: f64,
        _price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<f64> {
        self.check(yield_value, now, convention)?;
        Ok(PRICE_BASE * self.coupon / yield_value)
    }

    /// `1 / yield`.
    fn duration(&self, yield_value: f64, now: f64, convention: YieldConvention) -> BondResult<f64> {
        self.check(yield_value, now, convention)?;
        Ok(1.0 / yield_value)
    }
}

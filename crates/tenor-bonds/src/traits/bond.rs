//! Core Bond trait definition.

use tenor_core::types::{PriceType, YieldConvention};

use crate::error::{BondError, BondResult};
use crate::risk;

/// Common interface for bonds priced from a single yield.
///
/// Implementors supply [`Bond::price`]; duration and convexity are derived
/// from it by one basis point yield shocks unless an implementor has a
/// closed form.
pub trait Bond {
    /// Price per 100 face at `yield_value` as seen from `now`.
    ///
    /// # Errors
    ///
    /// [`BondError::UnsupportedConvention`] for a price type or yield
    /// convention the bond does not implement.
    fn price(
        &self,
        yield_value: f64,
        now: f64,
        price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<f64>;

    /// Effective duration from symmetric one basis point shocks on dirty prices.
    ///
    /// `(P(y - 1bp) - P(y + 1bp)) / (2 * P(y) * 1bp)`
    fn duration(&self, yield_value: f64, now: f64, convention: YieldConvention) -> BondResult<f64> {
        risk::effective_duration(
            |y| self.price(y, now, PriceType::Dirty, convention),
            yield_value,
            risk::BASIS_POINT,
        )
    }

    /// Effective convexity from symmetric one basis point shocks on dirty prices.
    ///
    /// `(P(y - 1bp) + P(y + 1bp) - 2 * P(y)) / (P(y) * 1bp^2)`
    fn convexity(&self, yield_value: f64, now: f64, convention: YieldConvention) -> BondResult<f64> {
        risk::effective_convexity(
            |y| self.price(y, now, PriceType::Dirty, convention),
            yield_value,
            risk::BASIS_POINT,
        )
    }
}

/// Rejects quotes other than a dirty price with a bond-convention yield.
pub(crate) fn check_quote(price_type: PriceType, convention: YieldConvention) -> BondResult<()> {
    convention.require_bond().map_err(BondError::from_core)?;
    price_type.require_dirty().map_err(BondError::from_core)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_quote() {
        assert!(check_quote(PriceType::Dirty, YieldConvention::Bond).is_ok());
        assert!(matches!(
            check_quote(PriceType::Clean, YieldConvention::Bond),
            Err(BondError::UnsupportedConvention { .. })
        ));
        assert!(matches!(
            check_quote(PriceType::Dirty, YieldConvention::MoneyMarket),
            Err(BondError::UnsupportedConvention { .. })
        ));
    }
}

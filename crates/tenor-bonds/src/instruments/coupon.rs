//! Fixed coupon bullet bond.

use serde::{Deserialize, Serialize};

use tenor_core::cashflows::CashFlowSchedule;
use tenor_core::discounting::{convert_rate, discount_factor};
use tenor_core::types::{Compounding, Frequency, PriceType, YieldConvention};
use tenor_curves::ZeroCurve;

use crate::error::{BondError, BondResult};
use crate::pricing::YieldSolver;
use crate::traits::{check_quote, Bond};

/// A fixed coupon bond repaying 100 at maturity.
///
/// Dates are year fractions. Coupons of `100 * coupon / frequency` fall on a
/// grid stepping back from maturity.
///
/// A bond yield is compounded at the coupon frequency, so a semi-annual
/// bond's yield is converted to its annual effective equivalent before
/// discounting.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::prelude::*;
///
/// // 4-year 10% semi-annual bond at an 8% yield
/// let bond = CouponBond::new(4.0, 0.10, Frequency::SemiAnnual).unwrap();
/// let price = bond
///     .price(0.08, 0.0, PriceType::Dirty, YieldConvention::Bond)
///     .unwrap();
/// assert!((price - 106.7327).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouponBond {
    maturity: f64,
    coupon: f64,
    frequency: Frequency,
}

impl CouponBond {
    /// Creates a coupon bond.
    ///
    /// `coupon` is a decimal rate: 0.04 is a 4% coupon.
    pub fn new(maturity: f64, coupon: f64, frequency: Frequency) -> BondResult<Self> {
        if !maturity.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "maturity must be finite, got {maturity}"
            )));
        }
        if !coupon.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "coupon must be finite, got {coupon}"
            )));
        }
        Ok(Self {
            maturity,
            coupon,
            frequency,
        })
    }

    /// Maturity date.
    #[must_use]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Coupon rate.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Remaining cash flows as seen from `now`.
    pub fn cash_flows(&self, now: f64) -> BondResult<CashFlowSchedule> {
        Ok(CashFlowSchedule::generate(
            self.maturity,
            self.coupon,
            self.frequency,
            now,
        )?)
    }

    /// Annual effective rate equivalent to a bond-convention yield.
    #[must_use]
    pub fn annual_rate(&self, yield_value: f64) -> f64 {
        convert_rate(yield_value, self.frequency.into(), Compounding::Annual)
    }

    /// Bond-convention yield equivalent to an annual effective rate.
    #[must_use]
    pub fn bond_yield(&self, annual_rate: f64) -> f64 {
        convert_rate(annual_rate, Compounding::Annual, self.frequency.into())
    }

    /// Fair value off a zero curve.
    ///
    /// # Errors
    ///
    /// Fails for a clean price type, or if a cash flow falls past the end of
    /// the curve.
    pub fn price_from_curve(
        &self,
        now: f64,
        curve: &ZeroCurve,
        price_type: PriceType,
    ) -> BondResult<f64> {
        price_type.require_dirty().map_err(BondError::from_core)?;
        let schedule = self.cash_flows(now)?;
        Ok(schedule.try_present_value(|t| curve.discount_factor_at(t))?)
    }

    /// Yield at which the bond is worth `price`, using the default
    /// [`YieldSolver`] bracket and tolerance.
    pub fn yield_from_price(
        &self,
        now: f64,
        price: f64,
        price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<f64> {
        let result = YieldSolver::default().solve(self, now, price, price_type, convention)?;
        Ok(result.yield_value)
    }
}

impl Bond for CouponBond {
    fn price(
        &self,
        yield_value: f64,
        now: f64,
        price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<f64> {
        check_quote(price_type, convention)?;
        let rate = self.annual_rate(yield_value);
        let schedule = self.cash_flows(now)?;
        Ok(schedule.present_value(|t| discount_factor(t, rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DIRTY: PriceType = PriceType::Dirty;
    const BOND: YieldConvention = YieldConvention::Bond;

    #[test]
    fn test_price_semi_annual() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::SemiAnnual).unwrap();
        let price = bond.price(0.08, 0.0, DIRTY, BOND).unwrap();
        assert_relative_eq!(price, 106.7327, epsilon = 1e-4);
    }

    #[test]
    fn test_price_annual() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::Annual).unwrap();
        let price = bond.price(0.12, 0.0, DIRTY, BOND).unwrap();
        assert_relative_eq!(price, 93.9253, epsilon = 1e-4);
    }

    #[test]
    fn test_price_at_coupon_is_par() {
        let bond = CouponBond::new(10.0, 0.06, Frequency::SemiAnnual).unwrap();
        assert_relative_eq!(
            bond.price(0.06, 0.0, DIRTY, BOND).unwrap(),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_duration() {
        let bond = CouponBond::new(20.0, 0.09, Frequency::SemiAnnual).unwrap();
        let duration = bond.duration(0.06, 0.0, BOND).unwrap();
        assert_relative_eq!(duration, 10.66, epsilon = 5e-3);
    }

    #[test]
    fn test_convexity_positive() {
        let bond = CouponBond::new(20.0, 0.09, Frequency::SemiAnnual).unwrap();
        let convexity = bond.convexity(0.06, 0.0, BOND).unwrap();
        assert_relative_eq!(convexity, 164.1, epsilon = 0.5);
    }

    #[test]
    fn test_unsupported_quotes() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::Annual).unwrap();
        assert!(matches!(
            bond.price(0.05, 0.0, PriceType::Clean, BOND),
            Err(BondError::UnsupportedConvention { .. })
        ));
        assert!(matches!(
            bond.price(0.05, 0.0, DIRTY, YieldConvention::MoneyMarket),
            Err(BondError::UnsupportedConvention { .. })
        ));
    }

    #[test]
    fn test_matured_bond_is_worthless() {
        let bond = CouponBond::new(4.0, 0.10, Frequency::Annual).unwrap();
        assert_eq!(bond.price(0.05, 4.0, DIRTY, BOND).unwrap(), 0.0);
        assert!(bond.cash_flows(5.0).unwrap().is_empty());
    }

    #[test]
    fn test_price_from_curve() {
        let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
        let bond = CouponBond::new(10.0, 0.08, Frequency::Annual).unwrap();
        let price = bond.price_from_curve(0.0, &curve, DIRTY).unwrap();
        assert_relative_eq!(price, 116.642424, epsilon = 1e-5);
    }

    #[test]
    fn test_flat_curve_prices_at_par() {
        let curve = ZeroCurve::flat(0.05, 30.0).unwrap();
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        assert_relative_eq!(
            bond.price_from_curve(0.0, &curve, DIRTY).unwrap(),
            100.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_price_from_curve_past_end() {
        let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
        let bond = CouponBond::new(12.0, 0.08, Frequency::Annual).unwrap();
        assert!(matches!(
            bond.price_from_curve(0.0, &curve, DIRTY),
            Err(BondError::Curve(_))
        ));
    }

    #[test]
    fn test_yield_from_price() {
        let bond = CouponBond::new(2.0, 0.05, Frequency::Annual).unwrap();
        let y = bond.yield_from_price(0.0, 100.0, DIRTY, BOND).unwrap();
        assert_relative_eq!(y, 0.05, epsilon = 1e-4);
    }

    #[test]
    fn test_yield_from_curve_price() {
        let curve = ZeroCurve::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
        let bond = CouponBond::new(10.0, 0.08, Frequency::Annual).unwrap();
        let price = bond.price_from_curve(0.0, &curve, DIRTY).unwrap();
        let y = bond.yield_from_price(0.0, price, DIRTY, BOND).unwrap();
        assert_relative_eq!(y, 0.057641, epsilon = 1e-5);
    }

    #[test]
    fn test_semi_annual_yield_round_trip() {
        let bond = CouponBond::new(20.0, 0.09, Frequency::SemiAnnual).unwrap();
        let price = bond.price(0.06, 0.0, DIRTY, BOND).unwrap();
        let y = bond.yield_from_price(0.0, price, DIRTY, BOND).unwrap();
        assert_relative_eq!(y, 0.06, epsilon = 1e-5);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(CouponBond::new(f64::NAN, 0.05, Frequency::Annual).is_err());
        assert!(CouponBond::new(5.0, f64::INFINITY, Frequency::Annual).is_err());
    }
}

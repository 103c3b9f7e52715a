//! Inflation-linked bond.

use tenor_core::cashflows::CashFlowSchedule;
use tenor_core::types::{Frequency, PriceType, YieldConvention};
use tenor_curves::{ExtrapolationPolicy, IndexCurve, ZeroCurve};

use crate::error::{BondError, BondResult};
use crate::instruments::CouponBond;
use crate::pricing::BreakevenSolver;
use crate::traits::Bond;

/// A coupon bond whose cash flows are scaled by an inflation index.
///
/// Each flow is multiplied by the index ratio `I(date) / I(base_date)`. Past
/// the last known fixing the index is projected at an assumed constant
/// inflation rate, which is what [`InflationLinkedBond::economic_breakeven`]
/// solves for.
///
/// Priced from a real yield, the linker behaves exactly like the underlying
/// [`CouponBond`].
#[derive(Debug, Clone)]
pub struct InflationLinkedBond {
    bond: CouponBond,
    index: IndexCurve,
    base_level: f64,
}

impl InflationLinkedBond {
    /// Creates a linker issued at `issue_date`, with the index set to 1 there.
    pub fn new(
        maturity: f64,
        coupon: f64,
        frequency: Frequency,
        issue_date: f64,
    ) -> BondResult<Self> {
        let bond = CouponBond::new(maturity, coupon, frequency)?;
        let index = IndexCurve::with_values(vec![issue_date], vec![1.0])?;
        Ok(Self {
            bond,
            index,
            base_level: 1.0,
        })
    }

    /// Creates a linker over an existing index history.
    ///
    /// Index ratios are taken relative to the level at `base_date`.
    pub fn with_index(bond: CouponBond, index: IndexCurve, base_date: f64) -> BondResult<Self> {
        let base_level = index.value(base_date, ExtrapolationPolicy::Strict)?;
        if !(base_level > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "base index level must be positive, got {base_level}"
            )));
        }
        Ok(Self {
            bond,
            index,
            base_level,
        })
    }

    /// The underlying real coupon bond.
    #[must_use]
    pub fn bond(&self) -> &CouponBond {
        &self.bond
    }

    /// Index fixings.
    #[must_use]
    pub fn index(&self) -> &IndexCurve {
        &self.index
    }

    /// Index ratio at `date`, projecting past the last fixing at `inflation`.
    pub fn index_ratio(&self, date: f64, inflation: f64) -> BondResult<f64> {
        let level = self
            .index
            .value(date, ExtrapolationPolicy::Compounding { rate: inflation })?;
        Ok(level / self.base_level)
    }

    /// Value of the indexed cash flows off a nominal zero curve, assuming
    /// constant `inflation` past the last fixing.
    pub fn nominal_value(&self, now: f64, curve: &ZeroCurve, inflation: f64) -> BondResult<f64> {
        let schedule = self.bond.cash_flows(now)?;
        let mut value = 0.0;
        for (t, cf) in schedule.iter() {
            value += cf * curve.discount_factor_at(t)? * self.index_ratio(t, inflation)?;
        }
        Ok(value)
    }

    /// Constant inflation rate at which the linker is worth `price` off the
    /// nominal `curve`, with the default [`BreakevenSolver`] settings.
    pub fn economic_breakeven(
        &self,
        now: f64,
        price: f64,
        price_type: PriceType,
        curve: &ZeroCurve,
    ) -> BondResult<f64> {
        let result = BreakevenSolver::default().solve(self, now, price, price_type, curve)?;
        Ok(result.rate)
    }

    /// Checks every payment date can be indexed, so lookups inside a solver
    /// loop cannot fail.
    pub(crate) fn check_indexable(&self, schedule: &CashFlowSchedule) -> BondResult<()> {
        for &date in schedule.dates() {
            self.index.value(date, ExtrapolationPolicy::Flat)?;
        }
        Ok(())
    }
}

impl Bond for InflationLinkedBond {
    /// Price from a real yield.
    fn price(
        &self,
        yield_value: f64,
        now: f64,
        price_type: PriceType,
        convention: YieldConvention,
    ) -> BondResult<f64> {
        self.bond.price(yield_value, now, price_type, convention)
    }
}

//! Time grids and coupon bond cash-flow schedules.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Frequency;

/// Face value that prices and cash flows are quoted against.
pub const PRICE_BASE: f64 = 100.0;

/// Absorbs floating-point noise when counting grid steps and matching dates.
const GRID_EPSILON: f64 = 1e-9;

/// Returns an evenly spaced grid with `frequency` points per year.
///
/// The grid is aligned to `start`. If `stop` is not a whole number of steps
/// away, the grid ends at the last step before `stop`.
///
/// # Example
///
/// ```rust
/// use tenor_core::cashflows::create_grid;
///
/// assert_eq!(create_grid(0.0, 2.0, 2).unwrap(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(create_grid(10.0, 11.6, 2).unwrap(), vec![10.0, 10.5, 11.0, 11.5]);
/// ```
pub fn create_grid(start: f64, stop: f64, frequency: u32) -> CoreResult<Vec<f64>> {
    if stop < start {
        return Err(CoreError::invalid_input("stop point must be after start"));
    }
    if frequency == 0 {
        return Err(CoreError::invalid_input("grid frequency must be positive"));
    }

    let f = f64::from(frequency);
    let steps = (f * (stop - start) + GRID_EPSILON).floor() as usize;
    Ok((0..=steps).map(|i| start + i as f64 / f).collect())
}

/// Ordered `(date, amount)` cash flows of a bullet coupon bond per 100 face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    dates: Vec<f64>,
    amounts: Vec<f64>,
}

impl CashFlowSchedule {
    /// Generates the remaining cash flows of a coupon bond as seen from `now`.
    ///
    /// Payment dates step back from `maturity` at the coupon frequency. A
    /// payment falling exactly on `now` has already been made and is
    /// excluded. Each flow pays `100 * coupon / frequency`; the last one also
    /// returns the principal. A bond at or past maturity has no flows.
    ///
    /// ```rust
    /// use tenor_core::cashflows::CashFlowSchedule;
    /// use tenor_core::types::Frequency;
    ///
    /// let cfs = CashFlowSchedule::generate(1.0, 0.04, Frequency::SemiAnnual, 0.25).unwrap();
    /// assert_eq!(cfs.dates(), &[0.5, 1.0]);
    /// assert_eq!(cfs.amounts(), &[2.0, 102.0]);
    /// ```
    pub fn generate(
        maturity: f64,
        coupon: f64,
        frequency: Frequency,
        now: f64,
    ) -> CoreResult<Self> {
        if !maturity.is_finite() || !now.is_finite() {
            return Err(CoreError::invalid_input(format!(
                "maturity ({maturity}) and valuation date ({now}) must be finite"
            )));
        }
        if now >= maturity {
            return Ok(Self::default());
        }

        // Align the grid to maturity by building it on the negated time axis.
        let mut dates: Vec<f64> = create_grid(-maturity, -now, frequency.periods_per_year())?
            .into_iter()
            .map(|t| -t)
            .rev()
            .collect();
        if dates.first().is_some_and(|d| (d - now).abs() < GRID_EPSILON) {
            dates.remove(0);
        }

        let coupon_payment = PRICE_BASE * coupon / f64::from(frequency.periods_per_year());
        let mut amounts = vec![coupon_payment; dates.len()];
        if let Some(last) = amounts.last_mut() {
            *last += PRICE_BASE;
        }

        trace!(
            "generated {} cash flows for {}y {} bond from {}",
            dates.len(),
            maturity,
            frequency,
            now
        );
        Ok(Self { dates, amounts })
    }

    /// Builds a schedule from explicit dates and amounts.
    pub fn from_parts(dates: Vec<f64>, amounts: Vec<f64>) -> CoreResult<Self> {
        if dates.len() != amounts.len() {
            return Err(CoreError::invalid_input(format!(
                "dates and amounts must have same length: {} vs {}",
                dates.len(),
                amounts.len()
            )));
        }
        Ok(Self { dates, amounts })
    }

    /// Payment dates, ascending.
    #[must_use]
    pub fn dates(&self) -> &[f64] {
        &self.dates
    }

    /// Payment amounts per 100 face.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Number of remaining payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no payments remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over `(date, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.dates.iter().copied().zip(self.amounts.iter().copied())
    }

    /// Sum of `amount * discount(date)` over the schedule.
    pub fn present_value<F>(&self, discount: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|(t, cf)| cf * discount(t)).sum()
    }

    /// Like [`present_value`](Self::present_value) with a fallible discount lookup.
    pub fn try_present_value<F, E>(&self, discount: F) -> Result<f64, E>
    where
        F: Fn(f64) -> Result<f64, E>,
    {
        self.iter()
            .try_fold(0.0, |acc, (t, cf)| Ok(acc + cf * discount(t)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_annual() {
        assert_eq!(
            create_grid(0.0, 5.0, 1).unwrap(),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_grid_negative_time() {
        assert_eq!(
            create_grid(-1.0, 0.0, 4).unwrap(),
            vec![-1.0, -0.75, -0.5, -0.25, 0.0]
        );
    }

    #[test]
    fn test_grid_truncates() {
        assert_eq!(create_grid(10.0, 11.1, 1).unwrap(), vec![10.0, 11.0]);
    }

    #[test]
    fn test_grid_inverted() {
        assert!(matches!(
            create_grid(1.0, 0.0, 1),
            Err(CoreError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_two_year_annual() {
        let cfs = CashFlowSchedule::generate(2.0, 0.05, Frequency::Annual, 0.0).unwrap();
        assert_eq!(cfs.dates(), &[1.0, 2.0]);
        assert_eq!(cfs.amounts(), &[5.0, 105.0]);
    }

    #[test]
    fn test_at_maturity_is_empty() {
        let cfs = CashFlowSchedule::generate(2.0, 0.05, Frequency::Annual, 2.0).unwrap();
        assert!(cfs.is_empty());
    }

    #[test]
    fn test_mid_period_valuation() {
        let cfs = CashFlowSchedule::generate(3.0, 0.06, Frequency::SemiAnnual, 1.7).unwrap();
        assert_eq!(cfs.len(), 3);
        assert_relative_eq!(cfs.dates()[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(cfs.amounts()[2], 103.0, epsilon = 1e-12);
    }

    #[test]
    fn test_payment_on_valuation_date_excluded() {
        let cfs = CashFlowSchedule::generate(10.0, 0.04, Frequency::Annual, 4.0).unwrap();
        assert_eq!(cfs.len(), 6);
        assert_relative_eq!(cfs.dates()[0], 5.0);
    }

    #[test]
    fn test_present_value() {
        let cfs = CashFlowSchedule::generate(2.0, 0.05, Frequency::Annual, 0.0).unwrap();
        let pv = cfs.present_value(|t| 1.05_f64.powf(-t));
        assert_relative_eq!(pv, 100.0, epsilon = 1e-10);

        let failed: Result<f64, &str> = cfs.try_present_value(|_| Err("no curve"));
        assert_eq!(failed, Err("no curve"));
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        assert!(CashFlowSchedule::from_parts(vec![1.0], vec![]).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn frequency() -> impl Strategy<Value = Frequency> {
            prop::sample::select(vec![
                Frequency::Annual,
                Frequency::SemiAnnual,
                Frequency::Quarterly,
                Frequency::Monthly,
            ])
        }

        proptest! {
            #[test]
            fn schedule_is_ordered_and_ends_at_maturity(
                maturity in 0.5f64..30.0,
                coupon in 0.0f64..0.15,
                frequency in frequency(),
                frac in 0.0f64..0.99,
            ) {
                let now = maturity * frac;
                let cfs = CashFlowSchedule::generate(maturity, coupon, frequency, now).unwrap();

                prop_assert!(!cfs.is_empty());
                prop_assert!(cfs.dates().windows(2).all(|w| w[0] < w[1]));
                prop_assert!(cfs.dates()[0] > now);
                prop_assert!((cfs.dates()[cfs.len() - 1] - maturity).abs() < 1e-9);

                let periods = f64::from(frequency.periods_per_year());
                let last = cfs.amounts()[cfs.len() - 1];
                prop_assert!((last - (PRICE_BASE + PRICE_BASE * coupon / periods)).abs() < 1e-9);
            }
        }
    }
}

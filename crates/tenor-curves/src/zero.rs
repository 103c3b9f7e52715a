//! Zero-coupon yield curve.

use log::debug;

use tenor_core::cashflows::{CashFlowSchedule, PRICE_BASE};
use tenor_core::discounting::discount_factor;
use tenor_core::types::Frequency;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};
use tenor_math::solvers::{bisection, Bracket, Monotonicity, SolverConfig};

use crate::error::{CurveError, CurveResult};

/// Default tolerance of the par coupon search.
pub const PAR_COUPON_TOLERANCE: f64 = 1e-6;

/// Width added either side of the curve's rate range to form the default
/// par coupon bracket.
const PAR_COUPON_BRACKET_PAD: f64 = 0.01;

/// A zero-coupon yield curve.
///
/// Holds annually compounded zero rates at increasing maturity pillars.
/// Rates between pillars are linearly interpolated; maturities at or before
/// the first pillar take the first pillar's rate. There is no extrapolation
/// past the last pillar.
///
/// # Example
///
/// ```rust
/// use tenor_curves::ZeroCurve;
/// use tenor_core::types::Frequency;
///
/// let curve = ZeroCurve::flat(0.05, 30.0).unwrap();
/// let par = curve.par_coupon(10.0, Frequency::Annual).unwrap();
/// assert!((par - 0.05).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    maturities: Vec<f64>,
    rates: Vec<f64>,
    /// Present once there are at least two pillars.
    interpolator: Option<LinearInterpolator>,
}

impl ZeroCurve {
    /// Creates a zero curve from maturity pillars and zero rates.
    ///
    /// # Errors
    ///
    /// - [`CurveError::EmptyCurve`] with no pillars
    /// - [`CurveError::InvalidData`] on length mismatch or a negative maturity
    /// - [`CurveError::NonMonotonic`] unless maturities strictly increase
    pub fn new(maturities: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if maturities.len() != rates.len() {
            return Err(CurveError::invalid_data(format!(
                "zero curve and maturities must be equal length: {} vs {}",
                maturities.len(),
                rates.len()
            )));
        }
        if maturities.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if maturities[0] < 0.0 {
            return Err(CurveError::invalid_data(format!(
                "negative maturity {}",
                maturities[0]
            )));
        }
        check_increasing(&maturities)?;

        let interpolator = if maturities.len() >= 2 {
            Some(LinearInterpolator::new(maturities.clone(), rates.clone())?)
        } else {
            None
        };

        Ok(Self {
            maturities,
            rates,
            interpolator,
        })
    }

    /// Creates a curve flat at `rate` from zero out to `horizon`.
    pub fn flat(rate: f64, horizon: f64) -> CurveResult<Self> {
        Self::new(vec![0.0, horizon], vec![rate, rate])
    }

    /// Maturity pillars.
    #[must_use]
    pub fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    /// Zero rates at each pillar.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Longest maturity covered by the curve.
    #[must_use]
    pub fn max_maturity(&self) -> f64 {
        self.maturities[self.maturities.len() - 1]
    }

    /// Returns the interpolated zero rate at `maturity`.
    ///
    /// # Errors
    ///
    /// [`CurveError::OutOfRange`] if `maturity` is negative or beyond the
    /// last pillar.
    pub fn rate_at(&self, maturity: f64) -> CurveResult<f64> {
        let first = self.maturities[0];
        let last = self.max_maturity();

        if !(0.0..=last).contains(&maturity) {
            return Err(CurveError::OutOfRange {
                requested: maturity,
                min: 0.0,
                max: last,
            });
        }

        // Flat at the first rate here, not the maturity.
        if maturity <= first {
            return Ok(self.rates[0]);
        }

        match &self.interpolator {
            Some(interp) => Ok(interp.interpolate(maturity)?),
            None => Ok(self.rates[0]),
        }
    }

    /// Returns the discount factor `(1 + r)^(-maturity)` at `maturity`.
    pub fn discount_factor_at(&self, maturity: f64) -> CurveResult<f64> {
        let rate = self.rate_at(maturity)?;
        Ok(discount_factor(maturity, rate))
    }

    /// Coupon rate at which a bond of this maturity prices at par off the curve.
    ///
    /// Uses the default bracket (the curve's rate range padded by one
    /// percentage point each side) and [`PAR_COUPON_TOLERANCE`].
    pub fn par_coupon(&self, maturity: f64, frequency: Frequency) -> CurveResult<f64> {
        let config = SolverConfig::default().with_tolerance(PAR_COUPON_TOLERANCE);
        self.par_coupon_with(maturity, frequency, None, &config)
    }

    /// Par coupon with an explicit bracket and solver settings.
    ///
    /// The bond is valued as of time zero, so only whole-year maturities are
    /// supported.
    ///
    /// # Errors
    ///
    /// - [`CurveError::NonIntegerMaturity`] for a fractional maturity
    /// - [`CurveError::InvalidData`] for a non-positive maturity
    /// - [`CurveError::OutOfRange`] if the maturity is past the curve
    /// - [`CurveError::Math`] wrapping `InvalidBracket` for `lo >= hi`, or
    ///   `RootNotBracketed` when the price never crosses par in the bracket
    pub fn par_coupon_with(
        &self,
        maturity: f64,
        frequency: Frequency,
        bracket: Option<Bracket>,
        config: &SolverConfig,
    ) -> CurveResult<f64> {
        if maturity.fract() != 0.0 {
            return Err(CurveError::NonIntegerMaturity { maturity });
        }
        if maturity <= 0.0 {
            return Err(CurveError::invalid_data(format!(
                "par coupon maturity must be positive, got {maturity}"
            )));
        }

        let bracket = match bracket {
            Some(bracket) => bracket,
            None => self.default_par_bracket()?,
        };

        // Payment dates do not depend on the coupon, so discount once.
        let schedule = CashFlowSchedule::generate(maturity, 0.0, frequency, 0.0)?;
        let dfs = schedule
            .dates()
            .iter()
            .map(|&t| self.discount_factor_at(t))
            .collect::<CurveResult<Vec<f64>>>()?;
        let annuity: f64 = dfs.iter().sum();
        let final_df = dfs.last().copied().unwrap_or(0.0);
        let periods = f64::from(frequency.periods_per_year());

        let price = |coupon: f64| PRICE_BASE * (coupon / periods * annuity + final_df);

        let result = bisection(
            |coupon| price(coupon) - PRICE_BASE,
            bracket,
            Monotonicity::Increasing,
            config,
        )?;

        debug!(
            "par coupon for {}y {} bond: {:.6} ({} iterations)",
            maturity, frequency, result.root, result.iterations
        );
        Ok(result.root)
    }

    fn default_par_bracket(&self) -> CurveResult<Bracket> {
        let min = self.rates.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Bracket::new(
            min - PAR_COUPON_BRACKET_PAD,
            max + PAR_COUPON_BRACKET_PAD,
        )?)
    }
}

/// Checks that pillars strictly increase.
pub(crate) fn check_increasing(points: &[f64]) -> CurveResult<()> {
    for (index, pair) in points.windows(2).enumerate() {
        if !(pair[1] > pair[0]) {
            return Err(CurveError::NonMonotonic {
                index: index + 1,
                prev: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

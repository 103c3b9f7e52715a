//! Inflation index curve.

use tenor_math::extrapolation::ExtrapolationPolicy;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::zero::check_increasing;

/// Inflation index levels on dates, linearly interpolated.
///
/// Dates are year fractions (see `tenor_core::calendar`). What happens past
/// the last fixing is decided per lookup by an [`ExtrapolationPolicy`], so a
/// single curve can be read concurrently under different assumptions.
///
/// # Example
///
/// ```rust
/// use tenor_curves::{ExtrapolationPolicy, IndexCurve};
///
/// let index = IndexCurve::with_values(vec![0.0, 1.0], vec![100.0, 102.0]).unwrap();
/// assert_eq!(index.value(0.5, ExtrapolationPolicy::Strict).unwrap(), 101.0);
///
/// // Past the last fixing only with an explicit policy
/// assert!(index.value(2.0, ExtrapolationPolicy::Strict).is_err());
/// let projected = index
///     .value(2.0, ExtrapolationPolicy::Compounding { rate: 0.02 })
///     .unwrap();
/// assert!((projected - 104.04).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexCurve {
    dates: Vec<f64>,
    levels: Vec<f64>,
    interpolator: Option<LinearInterpolator>,
}

impl IndexCurve {
    /// Creates an index curve with no fixings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index curve from fixings in any order.
    pub fn with_values(dates: Vec<f64>, levels: Vec<f64>) -> CurveResult<Self> {
        let mut curve = Self::new();
        curve.set_values(dates, levels)?;
        Ok(curve)
    }

    /// Replaces all fixings.
    ///
    /// Pairs are sorted by date. On error the curve is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidData`] on length mismatch or a non-finite date
    /// - [`CurveError::NonMonotonic`] if a date appears twice
    pub fn set_values(&mut self, dates: Vec<f64>, levels: Vec<f64>) -> CurveResult<()> {
        if dates.len() != levels.len() {
            return Err(CurveError::invalid_data(format!(
                "index dates and values must be equal length: {} vs {}",
                dates.len(),
                levels.len()
            )));
        }
        if let Some(bad) = dates.iter().find(|d| !d.is_finite()) {
            return Err(CurveError::invalid_data(format!("non-finite index date {bad}")));
        }

        let mut pairs: Vec<(f64, f64)> = dates.into_iter().zip(levels).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (dates, levels): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

        check_increasing(&dates)?;

        let interpolator = if dates.len() >= 2 {
            Some(LinearInterpolator::new(dates.clone(), levels.clone())?)
        } else {
            None
        };

        self.dates = dates;
        self.levels = levels;
        self.interpolator = interpolator;
        Ok(())
    }

    /// Fixing dates in increasing order.
    #[must_use]
    pub fn dates(&self) -> &[f64] {
        &self.dates
    }

    /// Index levels matching [`IndexCurve::dates`].
    #[must_use]
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of fixings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no fixings are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Index level at `date`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::EmptyCurve`] with no fixings loaded
    /// - [`CurveError::OutOfRange`] for a date before the first fixing
    /// - [`CurveError::BeyondData`] for a date after the last fixing under
    ///   [`ExtrapolationPolicy::Strict`]
    pub fn value(&self, date: f64, policy: ExtrapolationPolicy) -> CurveResult<f64> {
        let (Some(&first), Some(&last)) = (self.dates.first(), self.dates.last()) else {
            return Err(CurveError::EmptyCurve);
        };

        if date.is_nan() || date < first {
            return Err(CurveError::OutOfRange {
                requested: date,
                min: first,
                max: last,
            });
        }

        if date > last {
            let last_level = self.levels[self.levels.len() - 1];
            let slope = match &self.interpolator {
                Some(interp) => interp.derivative(last)?,
                None => 0.0,
            };
            return policy
                .extrapolate(date, last, last_level, slope)
                .ok_or(CurveError::BeyondData {
                    requested: date,
                    last,
                });
        }

        match &self.interpolator {
            Some(interp) => Ok(interp.interpolate(date)?),
            // One fixing and date == first
            None => Ok(self.levels[0]),
        }
    }
}

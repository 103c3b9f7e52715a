//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Connects consecutive points with straight lines. A query that hits a knot
/// exactly returns the stored value unchanged.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
/// let rate = interp.interpolate(5.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self { xs, ys })
    }

    /// X coordinates.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y coordinates.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|probe| probe.total_cmp(&x)) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if let Ok(i) = self.xs.binary_search_by(|probe| probe.total_cmp(&x)) {
            return Ok(self.ys[i]);
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let i = self.find_segment(x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-10);

        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_knots_are_exact() {
        let interp = LinearInterpolator::new(vec![0.0, 10.0], vec![0.04, 0.06]).unwrap();
        assert_eq!(interp.interpolate(10.0).unwrap(), 0.06);
    }

    #[test]
    fn test_extrapolation_disabled() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();

        assert!(matches!(
            interp.interpolate(-0.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(interp.interpolate(2.5).is_err());
    }

    #[test]
    fn test_insufficient_points() {
        assert!(matches!(
            LinearInterpolator::new(vec![0.0], vec![1.0]),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_unsorted_error() {
        assert!(LinearInterpolator::new(vec![1.0, 0.0, 2.0], vec![1.0, 0.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(LinearInterpolator::new(vec![0.0, 1.0], vec![1.0]).is_err());
    }
}

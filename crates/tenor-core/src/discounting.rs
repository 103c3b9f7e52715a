//! Discounting primitives and rate conversion.
//!
//! Rates are annual decimals (`0.05` is 5%) and times are year fractions.
//!
//! For an annually compounded zero rate `r` the discount factor is
//! `(1 + r)^(-t)`; for an exponential (continuously compounded) rate it is
//! `exp(-r * t)`. Rate conversion always goes through the annual
//! effective rate.

use crate::error::{CoreError, CoreResult};
use crate::types::Compounding;

/// Discount factor for maturity `t` at annually compounded zero rate `r`.
///
/// # Example
///
/// ```rust
/// use tenor_core::discounting::discount_factor;
///
/// let df = discount_factor(1.0, 0.05);
/// assert!((df - 0.9524).abs() < 1e-4);
/// ```
#[must_use]
pub fn discount_factor(t: f64, r: f64) -> f64 {
    (1.0 + r).powf(-t)
}

/// Discount factor for maturity `t` at exponential zero rate `r`.
///
/// ```rust
/// use tenor_core::discounting::discount_factor_exponential;
///
/// let df = discount_factor_exponential(1.0, 0.05);
/// assert!((df - 0.9512).abs() < 1e-4);
/// ```
#[must_use]
pub fn discount_factor_exponential(t: f64, r: f64) -> f64 {
    (-r * t).exp()
}

/// Element-wise [`discount_factor`] over equally sized slices.
pub fn discount_factors(times: &[f64], rates: &[f64]) -> CoreResult<Vec<f64>> {
    check_lengths(times, rates)?;
    Ok(times
        .iter()
        .zip(rates)
        .map(|(&t, &r)| discount_factor(t, r))
        .collect())
}

/// Element-wise [`discount_factor_exponential`] over equally sized slices.
pub fn discount_factors_exponential(times: &[f64], rates: &[f64]) -> CoreResult<Vec<f64>> {
    check_lengths(times, rates)?;
    Ok(times
        .iter()
        .zip(rates)
        .map(|(&t, &r)| discount_factor_exponential(t, r))
        .collect())
}

fn check_lengths(times: &[f64], rates: &[f64]) -> CoreResult<()> {
    if times.len() != rates.len() {
        return Err(CoreError::invalid_input(format!(
            "maturities and rates must have same length: {} vs {}",
            times.len(),
            rates.len()
        )));
    }
    Ok(())
}

/// Annually compounded zero rate implied by a discount factor.
///
/// Inverse of [`discount_factor`]: `r = df^(-1/t) - 1`.
pub fn zero_rate_from_discount_factor(t: f64, df: f64) -> CoreResult<f64> {
    if t <= 0.0 {
        return Err(CoreError::invalid_input(format!(
            "maturity must be positive, got {t}"
        )));
    }
    if df <= 0.0 {
        return Err(CoreError::invalid_input(format!(
            "discount factor must be positive, got {df}"
        )));
    }
    Ok(df.powf(-1.0 / t) - 1.0)
}

/// Converts a rate quoted under one compounding convention to another.
///
/// # Example
///
/// ```rust
/// use tenor_core::discounting::convert_rate;
/// use tenor_core::types::Compounding;
///
/// // 4% semi-annual is 4.04% annual
/// let annual = convert_rate(0.04, Compounding::SemiAnnual, Compounding::Annual);
/// assert!((annual - 0.0404).abs() < 1e-10);
/// ```
#[must_use]
pub fn convert_rate(rate: f64, from: Compounding, to: Compounding) -> f64 {
    if from == to {
        return rate;
    }

    let annual = match from.periods_per_year() {
        Some(1) => rate,
        Some(n) => {
            let n = f64::from(n);
            (1.0 + rate / n).powf(n) - 1.0
        }
        None => rate.exp() - 1.0,
    };

    match to.periods_per_year() {
        Some(1) => annual,
        Some(n) => {
            let n = f64::from(n);
            n * ((1.0 + annual).powf(1.0 / n) - 1.0)
        }
        None => annual.ln_1p(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_flat_curve() {
        let times: Vec<f64> = (0..6).map(f64::from).collect();
        let rates = vec![0.05; 6];

        let dfs = discount_factors(&times, &rates).unwrap();
        let expected = [1.0, 0.9524, 0.9070, 0.8638, 0.8227, 0.7835];
        for (df, exp) in dfs.iter().zip(expected) {
            assert_relative_eq!(*df, exp, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_discount_factor_exponential() {
        let dfs = discount_factors_exponential(&[1.0, 2.0], &[0.05, 0.05]).unwrap();
        assert_relative_eq!(dfs[0], 0.9512, epsilon = 1e-4);
        assert_relative_eq!(dfs[1], 0.9048, epsilon = 1e-4);
    }

    #[test]
    fn test_length_mismatch() {
        let result = discount_factors(&[1.0, 2.0], &[0.05]);
        assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_rate_round_trip() {
        let df = discount_factor(7.5, 0.043);
        let r = zero_rate_from_discount_factor(7.5, df).unwrap();
        assert_relative_eq!(r, 0.043, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_rejects_bad_input() {
        assert!(zero_rate_from_discount_factor(0.0, 0.95).is_err());
        assert!(zero_rate_from_discount_factor(1.0, 0.0).is_err());
    }

    #[test]
    fn test_convert_identity() {
        assert_eq!(convert_rate(0.02, Compounding::Annual, Compounding::Annual), 0.02);
    }

    #[test]
    fn test_convert_semi_annual_to_annual() {
        let annual = convert_rate(0.04, Compounding::SemiAnnual, Compounding::Annual);
        assert_relative_eq!(annual, 0.0404, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_annual_to_semi_annual() {
        let semi = convert_rate(0.0404, Compounding::Annual, Compounding::SemiAnnual);
        assert_relative_eq!(semi, 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_continuous() {
        let annual = convert_rate(0.05, Compounding::Continuous, Compounding::Annual);
        assert_relative_eq!(
            discount_factor(3.0, annual),
            discount_factor_exponential(3.0, 0.05),
            epsilon = 1e-12
        );
        let back = convert_rate(annual, Compounding::Annual, Compounding::Continuous);
        assert_relative_eq!(back, 0.05, epsilon = 1e-12);
    }
}

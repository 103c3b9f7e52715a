//! CLI command implementations.
//!
//! Rates on the command line are percentages (5.0 for 5%). Dates and
//! maturities are year fractions.

pub mod breakeven;
pub mod config;
pub mod curve;
pub mod index;
pub mod price;

pub use breakeven::BreakevenArgs;
pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use index::IndexArgs;
pub use price::PriceArgs;

use tenor_core::types::Frequency;
use tenor_curves::ZeroCurve;

use crate::error::{CliError, CliResult};

/// Parses a coupon frequency given as payments per year.
pub fn parse_frequency(periods: u32) -> CliResult<Frequency> {
    Frequency::from_periods(periods).map_err(|_| CliError::InvalidFrequency(periods))
}

/// Converts a percentage to a decimal rate.
pub fn from_percent(value: f64) -> f64 {
    value / 100.0
}

/// Validates a coupon rate in percent.
pub fn validate_coupon(coupon: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&coupon) {
        return Err(CliError::InvalidArgument {
            name: "coupon",
            value: coupon,
            expected: "Must be between 0 and 100.",
        });
    }
    Ok(coupon)
}

/// Validates a yield in percent.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !(-10.0..=100.0).contains(&yield_value) {
        return Err(CliError::InvalidArgument {
            name: "yield",
            value: yield_value,
            expected: "Must be between -10 and 100.",
        });
    }
    Ok(yield_value)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price > 0.0) {
        return Err(CliError::InvalidArgument {
            name: "price",
            value: price,
            expected: "Must be positive.",
        });
    }
    Ok(price)
}

/// Fails unless two paired lists have the same length.
pub fn check_lengths(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> CliResult<()> {
    if left_len != right_len {
        return Err(CliError::LengthMismatch {
            left,
            right,
            left_len,
            right_len,
        });
    }
    Ok(())
}

/// Builds a zero curve from maturities and rates in percent.
pub fn build_zero_curve(maturities: &[f64], rates_pct: &[f64]) -> anyhow::Result<ZeroCurve> {
    check_lengths("maturities", maturities.len(), "rates", rates_pct.len())?;
    let rates = rates_pct.iter().copied().map(from_percent).collect();
    Ok(ZeroCurve::new(maturities.to_vec(), rates)?)
}

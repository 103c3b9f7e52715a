//! Index command implementation.
//!
//! Interpolates an inflation index between fixings and optionally projects
//! it past the last one.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_curves::{ExtrapolationPolicy, IndexCurve};

use crate::cli::OutputFormat;
use crate::commands::{check_lengths, from_percent};
use crate::output::print_section;

/// Arguments for the index command.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Fixing dates in years (comma-separated, any order)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub dates: Vec<f64>,

    /// Index levels matching --dates (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub levels: Vec<f64>,

    /// Dates to evaluate (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub at: Vec<f64>,

    /// Project past the last fixing at this annual inflation rate (percent)
    #[arg(short = 'r', long, conflicts_with = "flat")]
    pub extrapolation_rate: Option<f64>,

    /// Hold the last fixing flat past the end of the data
    #[arg(long)]
    pub flat: bool,
}

impl IndexArgs {
    fn policy(&self) -> ExtrapolationPolicy {
        match (self.flat, self.extrapolation_rate) {
            (true, _) => ExtrapolationPolicy::Flat,
            (false, Some(rate)) => ExtrapolationPolicy::Compounding {
                rate: from_percent(rate),
            },
            (false, None) => ExtrapolationPolicy::Strict,
        }
    }
}

/// An evaluated index level.
#[derive(Debug, Serialize, Tabled)]
pub struct IndexPoint {
    #[tabled(rename = "Date")]
    pub date: f64,
    #[tabled(rename = "Level", display_with = "display_level")]
    pub level: f64,
}

fn display_level(value: &f64) -> String {
    format!("{:.4}", value)
}

/// Execute the index command.
pub fn execute(args: IndexArgs, format: OutputFormat) -> Result<()> {
    check_lengths("dates", args.dates.len(), "levels", args.levels.len())?;
    let policy = args.policy();
    let index = IndexCurve::with_values(args.dates, args.levels)?;

    let points = args
        .at
        .into_iter()
        .map(|date| {
            Ok(IndexPoint {
                date,
                level: index.value(date, policy)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_section("Index Levels", &points, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flat: bool, rate: Option<f64>) -> IndexArgs {
        IndexArgs {
            dates: vec![0.0],
            levels: vec![100.0],
            at: vec![1.0],
            extrapolation_rate: rate,
            flat,
        }
    }

    #[test]
    fn test_policy_selection() {
        assert_eq!(args(false, None).policy(), ExtrapolationPolicy::Strict);
        assert_eq!(args(true, None).policy(), ExtrapolationPolicy::Flat);
        assert_eq!(
            args(false, Some(2.0)).policy(),
            ExtrapolationPolicy::Compounding { rate: 0.02 }
        );
    }
}

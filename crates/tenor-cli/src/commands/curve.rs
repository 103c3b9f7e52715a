//! Curve command implementation.
//!
//! Queries a piecewise-linear zero curve for rates, discount factors and
//! par coupons.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{build_zero_curve, parse_frequency};
use crate::config::TenorConfig;
use crate::output::{format_percent, print_section};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Curve maturities in years (comma-separated, e.g., "0,10")
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub maturities: Vec<f64>,

    /// Zero rates in percent (comma-separated, e.g., "4,6")
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub rates: Vec<f64>,

    /// Maturities to query (comma-separated). Defaults to the curve pillars.
    #[arg(short, long, value_delimiter = ',')]
    pub at: Vec<f64>,

    /// Whole-year maturities to solve par coupons for (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub par_coupon: Vec<f64>,

    /// Coupon frequency for par coupons: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// A curve point.
#[derive(Debug, Serialize, Tabled)]
pub struct CurvePoint {
    #[tabled(rename = "Maturity")]
    pub maturity: f64,
    #[tabled(rename = "Zero Rate", display_with = "display_percent")]
    pub zero_rate: f64,
    #[tabled(rename = "Discount Factor", display_with = "display_df")]
    pub discount_factor: f64,
}

/// A par coupon.
#[derive(Debug, Serialize, Tabled)]
pub struct ParCoupon {
    #[tabled(rename = "Maturity")]
    pub maturity: f64,
    #[tabled(rename = "Par Coupon", display_with = "display_percent")]
    pub par_coupon: f64,
}

fn display_percent(value: &f64) -> String {
    format_percent(*value)
}

fn display_df(value: &f64) -> String {
    format!("{:.6}", value)
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat, config: &TenorConfig) -> Result<()> {
    let curve = build_zero_curve(&args.maturities, &args.rates)?;

    let query = if args.at.is_empty() {
        curve.maturities().to_vec()
    } else {
        args.at
    };

    let points = query
        .into_iter()
        .map(|maturity| {
            Ok(CurvePoint {
                maturity,
                zero_rate: curve.rate_at(maturity)?,
                discount_factor: curve.discount_factor_at(maturity)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    print_section("Zero Curve", &points, format)?;

    if !args.par_coupon.is_empty() {
        let frequency = parse_frequency(args.frequency)?;
        let solver = config.par_coupon_solver();
        let coupons = args
            .par_coupon
            .into_iter()
            .map(|maturity| {
                Ok(ParCoupon {
                    maturity,
                    par_coupon: curve.par_coupon_with(maturity, frequency, None, &solver)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        print_section("Par Coupons", &coupons, format)?;
    }

    Ok(())
}

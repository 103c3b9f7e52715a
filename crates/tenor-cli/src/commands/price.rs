//! Price command implementation.
//!
//! Prices a coupon bond or consol from a yield, or solves the yield from a
//! dirty price, and reports duration and convexity.

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use tenor_bonds::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{from_percent, parse_frequency, validate_coupon, validate_price, validate_yield};
use crate::config::TenorConfig;
use crate::output::{print_section, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Maturity in years. Omit with --consol.
    #[arg(short, long, required_unless_present = "consol")]
    pub maturity: Option<f64>,

    /// Valuation date in years
    #[arg(short, long, default_value = "0")]
    pub now: f64,

    /// Yield (as percentage). If provided, calculates price.
    #[arg(short, long = "yield", group = "calc_mode")]
    pub yield_value: Option<f64>,

    /// Dirty price. If provided, calculates yield.
    #[arg(short, long, group = "calc_mode")]
    pub price: Option<f64>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Price a perpetual annual consol instead of a bullet bond
    #[arg(long, conflicts_with_all = ["maturity", "frequency"])]
    pub consol: bool,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat, config: &TenorConfig) -> Result<()> {
    let coupon = from_percent(validate_coupon(args.coupon)?);

    let mut results = Vec::new();

    let (bond, ytm): (Box<dyn Bond>, f64) = if args.consol {
        let consol = Consol::new(coupon);
        results.push(KeyValue::new("Bond Type", "Consol"));
        results.push(KeyValue::from_percent("Coupon", coupon));

        let ytm = match (args.yield_value, args.price) {
            (Some(y), _) => from_percent(validate_yield(y)?),
            (None, Some(price)) => {
                consol.yield_from_price(args.now, validate_price(price)?, YieldConvention::Bond)?
            }
            (None, None) => coupon,
        };
        (Box::new(consol), ytm)
    } else {
        let Some(maturity) = args.maturity else {
            bail!("--maturity is required for a coupon bond");
        };
        let frequency = parse_frequency(args.frequency)?;
        let bond = CouponBond::new(maturity, coupon, frequency)?;
        results.push(KeyValue::new("Bond Type", "Fixed Rate"));
        results.push(KeyValue::from_percent("Coupon", coupon));
        results.push(KeyValue::new("Maturity", maturity.to_string()));
        results.push(KeyValue::new("Frequency", frequency.to_string()));

        let ytm = match (args.yield_value, args.price) {
            (Some(y), _) => from_percent(validate_yield(y)?),
            (None, Some(price)) => {
                let result = config.yield_solver().solve(
                    &bond,
                    args.now,
                    validate_price(price)?,
                    PriceType::Dirty,
                    YieldConvention::Bond,
                )?;
                info!(iterations = result.iterations, "solved yield");
                result.yield_value
            }
            // Default: price at par (yield = coupon)
            (None, None) => coupon,
        };
        (Box::new(bond), ytm)
    };

    results.push(KeyValue::new("Valuation Date", args.now.to_string()));

    let metrics = RiskMetrics::calculate(bond.as_ref(), ytm, args.now, YieldConvention::Bond)?;

    let yield_label = if args.price.is_some() {
        "Yield to Maturity"
    } else {
        "Yield (Input)"
    };
    results.push(KeyValue::from_percent(yield_label, ytm));
    results.push(KeyValue::from_f64("Dirty Price", metrics.price, 6));
    results.push(KeyValue::from_f64("Duration", metrics.duration, 4));
    results.push(KeyValue::from_f64("Convexity", metrics.convexity, 4));
    results.push(KeyValue::from_f64("DV01", metrics.dv01, 6));

    print_section("Bond Pricing Results", &results, format)
}

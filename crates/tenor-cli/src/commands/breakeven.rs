//! Breakeven command implementation.
//!
//! Solves the economic breakeven inflation of a linker against a nominal
//! zero curve and compares it with the simple yield-difference breakevens.

use anyhow::Result;
use clap::Args;
use tracing::info;

use tenor_bonds::prelude::*;
use tenor_curves::CurveError;

use crate::cli::OutputFormat;
use crate::commands::{
    build_zero_curve, check_lengths, from_percent, parse_frequency, validate_coupon,
    validate_price,
};
use crate::config::TenorConfig;
use crate::output::{print_section, print_warning, KeyValue};

const DIRTY: PriceType = PriceType::Dirty;
const BOND: YieldConvention = YieldConvention::Bond;

/// Arguments for the breakeven command.
#[derive(Args, Debug)]
pub struct BreakevenArgs {
    /// Linker maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Real coupon rate (as percentage)
    #[arg(short, long)]
    pub coupon: f64,

    /// Linker dirty price
    #[arg(short, long)]
    pub price: f64,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "1")]
    pub frequency: u32,

    /// Nominal curve maturities in years (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub maturities: Vec<f64>,

    /// Nominal zero rates in percent (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub rates: Vec<f64>,

    /// Index base date in years
    #[arg(long, default_value = "0")]
    pub issue_date: f64,

    /// Valuation date in years
    #[arg(short, long, default_value = "0")]
    pub now: f64,

    /// Known index fixing dates (comma-separated). Without them the index
    /// starts at 1 on the issue date.
    #[arg(long, value_delimiter = ',', requires = "index_levels")]
    pub index_dates: Vec<f64>,

    /// Index levels matching --index-dates (comma-separated)
    #[arg(long, value_delimiter = ',', requires = "index_dates")]
    pub index_levels: Vec<f64>,

    /// Coupon of a conventional bond of the same maturity (as percentage),
    /// for the simple breakeven versus its yield
    #[arg(long)]
    pub nominal_coupon: Option<f64>,
}

impl BreakevenArgs {
    fn linker(&self, frequency: Frequency) -> Result<InflationLinkedBond> {
        let coupon = from_percent(validate_coupon(self.coupon)?);
        if self.index_dates.is_empty() {
            return Ok(InflationLinkedBond::new(
                self.maturity,
                coupon,
                frequency,
                self.issue_date,
            )?);
        }
        check_lengths(
            "index-dates",
            self.index_dates.len(),
            "index-levels",
            self.index_levels.len(),
        )?;
        let bond = CouponBond::new(self.maturity, coupon, frequency)?;
        let index = IndexCurve::with_values(self.index_dates.clone(), self.index_levels.clone())?;
        Ok(InflationLinkedBond::with_index(bond, index, self.issue_date)?)
    }
}

/// Execute the breakeven command.
pub fn execute(args: BreakevenArgs, format: OutputFormat, config: &TenorConfig) -> Result<()> {
    let frequency = parse_frequency(args.frequency)?;
    let curve = build_zero_curve(&args.maturities, &args.rates)?;
    let linker = args.linker(frequency)?;
    let price = validate_price(args.price)?;

    let economic = config
        .breakeven_solver()
        .solve(&linker, args.now, price, DIRTY, &curve)?;
    info!(iterations = economic.iterations, "solved breakeven");

    let real_yield = config
        .yield_solver()
        .solve(linker.bond(), args.now, price, DIRTY, BOND)?
        .yield_value;

    let mut results = vec![
        KeyValue::from_percent("Real Coupon", linker.bond().coupon()),
        KeyValue::from_percent("Real Yield", real_yield),
        KeyValue::from_percent("Economic Breakeven", economic.rate),
        KeyValue::new("Iterations", economic.iterations.to_string()),
    ];

    match curve.par_coupon_with(args.maturity, frequency, None, &config.par_coupon_solver()) {
        Ok(par) => {
            results.push(KeyValue::from_percent("Nominal Par Coupon", par));
            results.push(KeyValue::from_percent(
                "Simple Breakeven (vs Par)",
                par - real_yield,
            ));
        }
        Err(CurveError::NonIntegerMaturity { maturity }) => {
            print_warning(&format!(
                "no par coupon for fractional maturity {maturity}, skipping the par comparison"
            ));
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(nominal_coupon) = args.nominal_coupon {
        let nominal = CouponBond::new(
            args.maturity,
            from_percent(validate_coupon(nominal_coupon)?),
            frequency,
        )?;
        let nominal_price = nominal.price_from_curve(args.now, &curve, DIRTY)?;
        let nominal_yield = config
            .yield_solver()
            .solve(&nominal, args.now, nominal_price, DIRTY, BOND)?
            .yield_value;
        results.push(KeyValue::from_f64("Conventional Price", nominal_price, 6));
        results.push(KeyValue::from_percent("Conventional Yield", nominal_yield));
        results.push(KeyValue::from_percent(
            "Simple Breakeven (vs Conventional)",
            nominal_yield - real_yield,
        ));
    }

    print_section("Breakeven Inflation", &results, format)
}

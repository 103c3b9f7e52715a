//! Tenor CLI - bond, zero curve and breakeven inflation calculator.
//!
//! # Usage
//!
//! ```bash
//! # Price a 4 year 10% semi-annual bond at an 8% yield
//! tenor price --coupon 10 --maturity 4 --yield 8
//!
//! # Zero rates, discount factors and a 10 year par coupon
//! tenor curve --maturities 0,10 --rates 4,6 --at 2.5,5 --par-coupon 10
//!
//! # Economic breakeven of a 10 year 4% linker priced at par
//! tenor breakeven --maturity 10 --coupon 4 --price 100 --maturities 0,10 --rates 4,6
//!
//! # Inflation index with a 2% projection past the last fixing
//! tenor index --dates 0,1 --levels 100,102 --at 0.5,3 --extrapolation-rate 2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::TenorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Library crates log through `log`; the subscriber picks those up too.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let (config, source) = TenorConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format, &config)?,
        Commands::Curve(args) => commands::curve::execute(args, format, &config)?,
        Commands::Breakeven(args) => commands::breakeven::execute(args, format, &config)?,
        Commands::Index(args) => commands::index::execute(args, format)?,
        Commands::Config(args) => {
            commands::config::execute(args, format, &config, source.as_deref())?;
        }
    }

    Ok(())
}

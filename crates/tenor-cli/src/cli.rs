//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BreakevenArgs, ConfigArgs, CurveArgs, IndexArgs, PriceArgs};

/// Tenor - bond, zero curve and breakeven inflation calculator
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Solver settings file (TOML). Defaults to ./tenor.toml when present.
    #[arg(long, env = "TENOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a bond from a yield, or solve the yield from a price
    Price(PriceArgs),

    /// Query a zero curve: rates, discount factors and par coupons
    Curve(CurveArgs),

    /// Economic breakeven inflation of an inflation-linked bond
    Breakeven(BreakevenArgs),

    /// Interpolate an inflation index
    Index(IndexArgs),

    /// Show or create the solver settings file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

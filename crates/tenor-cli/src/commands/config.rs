//! Config command implementation.
//!
//! Shows the effective solver settings or writes a starter file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::{TenorConfig, DEFAULT_CONFIG_FILE};
use crate::output::{print_section, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective settings
    Show,

    /// Show which settings file is in use
    Path,

    /// Write the default settings to a file
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// File to create
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    format: OutputFormat,
    config: &TenorConfig,
    source: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(config, format),
        ConfigCommand::Path => {
            match source {
                Some(path) => println!("{}", path.display()),
                None => print_warning("no settings file found, using defaults"),
            }
            Ok(())
        }
        ConfigCommand::Init(init) => {
            if init.path.exists() && !init.force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    init.path.display()
                );
            }
            fs::write(&init.path, TenorConfig::default().to_toml()?)?;
            print_success(&format!("wrote {}", init.path.display()));
            Ok(())
        }
    }
}

fn show(config: &TenorConfig, format: OutputFormat) -> Result<()> {
    let rows = vec![
        KeyValue::new("yield_bracket", format_bracket(config.yield_bracket)),
        KeyValue::new("yield_tolerance", config.yield_tolerance.to_string()),
        KeyValue::new("breakeven_bracket", format_bracket(config.breakeven_bracket)),
        KeyValue::new("breakeven_tolerance", config.breakeven_tolerance.to_string()),
        KeyValue::new("par_coupon_tolerance", config.par_coupon_tolerance.to_string()),
        KeyValue::new("max_iterations", config.max_iterations.to_string()),
    ];
    print_section("Solver Settings", &rows, format)
}

fn format_bracket((lo, hi): (f64, f64)) -> String {
    format!("[{lo}, {hi}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bracket() {
        assert_eq!(format_bracket((-0.05, 0.1)), "[-0.05, 0.1]");
    }
}

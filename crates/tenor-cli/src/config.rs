//! Solver settings loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! library defaults:
//!
//! ```toml
//! yield_bracket = [0.0, 0.25]
//! yield_tolerance = 1e-6
//! breakeven_bracket = [-0.05, 0.10]
//! breakeven_tolerance = 1e-5
//! par_coupon_tolerance = 1e-6
//! max_iterations = 100
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tenor_bonds::pricing::{
    BreakevenSolver, YieldSolver, DEFAULT_BREAKEVEN_BRACKET, DEFAULT_BREAKEVEN_TOLERANCE,
    DEFAULT_YIELD_BRACKET, DEFAULT_YIELD_TOLERANCE,
};
use tenor_curves::zero::PAR_COUPON_TOLERANCE;
use tenor_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS};

use crate::error::{CliError, CliResult};

/// File looked for in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tenor.toml";

/// Bisection settings for every solver the CLI runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorConfig {
    /// Yield search bracket, as annual effective rates.
    #[serde(default = "default_yield_bracket")]
    pub yield_bracket: (f64, f64),

    /// Yield tolerance.
    #[serde(default = "default_yield_tolerance")]
    pub yield_tolerance: f64,

    /// Breakeven inflation search bracket.
    #[serde(default = "default_breakeven_bracket")]
    pub breakeven_bracket: (f64, f64),

    /// Breakeven tolerance.
    #[serde(default = "default_breakeven_tolerance")]
    pub breakeven_tolerance: f64,

    /// Par coupon tolerance. The bracket comes from the curve's rate range.
    #[serde(default = "default_par_coupon_tolerance")]
    pub par_coupon_tolerance: f64,

    /// Iteration cap shared by all solvers.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_yield_bracket() -> (f64, f64) {
    DEFAULT_YIELD_BRACKET
}

fn default_yield_tolerance() -> f64 {
    DEFAULT_YIELD_TOLERANCE
}

fn default_breakeven_bracket() -> (f64, f64) {
    DEFAULT_BREAKEVEN_BRACKET
}

fn default_breakeven_tolerance() -> f64 {
    DEFAULT_BREAKEVEN_TOLERANCE
}

fn default_par_coupon_tolerance() -> f64 {
    PAR_COUPON_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for TenorConfig {
    fn default() -> Self {
        Self {
            yield_bracket: default_yield_bracket(),
            yield_tolerance: default_yield_tolerance(),
            breakeven_bracket: default_breakeven_bracket(),
            breakeven_tolerance: default_breakeven_tolerance(),
            par_coupon_tolerance: default_par_coupon_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl TenorConfig {
    /// Parses and validates a TOML file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.check()?;
        debug!(path = %path.display(), "loaded solver settings");
        Ok(config)
    }

    /// Loads `explicit` if given, else `tenor.toml` in the working directory
    /// if it exists, else the defaults. Returns the file actually read.
    pub fn discover(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            let config = Self::load(&local)?;
            return Ok((config, Some(local)));
        }
        Ok((Self::default(), None))
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Validation(e.to_string()))
    }

    /// Lists every invalid field.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, (lo, hi)) in [
            ("yield_bracket", self.yield_bracket),
            ("breakeven_bracket", self.breakeven_bracket),
        ] {
            if !(lo < hi) {
                errors.push(ValidationError::new(
                    field,
                    format!("lower bound {lo} must be below upper bound {hi}"),
                ));
            }
        }

        for (field, tolerance) in [
            ("yield_tolerance", self.yield_tolerance),
            ("breakeven_tolerance", self.breakeven_tolerance),
            ("par_coupon_tolerance", self.par_coupon_tolerance),
        ] {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                errors.push(ValidationError::new(
                    field,
                    format!("tolerance must be positive, got {tolerance}"),
                ));
            }
        }

        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            errors.push(ValidationError::new(
                "max_iterations",
                "Max iterations must be between 1 and 10000",
            ));
        }

        errors
    }

    fn check(&self) -> CliResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(CliError::Validation(joined))
    }

    /// Yield solver with these settings.
    pub fn yield_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_bracket(self.yield_bracket.0, self.yield_bracket.1)
            .with_tolerance(self.yield_tolerance)
            .with_max_iterations(self.max_iterations)
    }

    /// Breakeven solver with these settings.
    pub fn breakeven_solver(&self) -> BreakevenSolver {
        BreakevenSolver::new()
            .with_bracket(self.breakeven_bracket.0, self.breakeven_bracket.1)
            .with_tolerance(self.breakeven_tolerance)
            .with_max_iterations(self.max_iterations)
    }

    /// Settings for the par coupon search.
    pub fn par_coupon_solver(&self) -> SolverConfig {
        SolverConfig::new(self.par_coupon_tolerance, self.max_iterations)
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = TenorConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.yield_bracket, (0.0, 0.25));
        assert_eq!(config.breakeven_bracket, (-0.05, 0.10));
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: TenorConfig = toml::from_str("yield_tolerance = 1e-9\n").unwrap();
        assert_eq!(config.yield_tolerance, 1e-9);
        assert_eq!(config.breakeven_tolerance, 1e-5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TenorConfig {
            breakeven_bracket: (-0.02, 0.08),
            ..TenorConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("breakeven_bracket"));
        let parsed: TenorConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation() {
        let config = TenorConfig {
            yield_bracket: (0.25, 0.0),
            par_coupon_tolerance: 0.0,
            max_iterations: 0,
            ..TenorConfig::default()
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["yield_bracket", "par_coupon_tolerance", "max_iterations"]
        );
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "breakeven_bracket = [0.0, 0.05]").unwrap();
        writeln!(file, "max_iterations = 60").unwrap();

        let config = TenorConfig::load(file.path()).unwrap();
        assert_eq!(config.breakeven_bracket, (0.0, 0.05));
        assert_eq!(config.max_iterations, 60);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "breakeven_bracket = [0.1, -0.1]").unwrap();
        assert!(matches!(
            TenorConfig::load(file.path()),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TenorConfig::load(&dir.path().join("absent.toml")),
            Err(CliError::Config { .. })
        ));
    }
}

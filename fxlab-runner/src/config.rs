//! Serializable sweep configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a sweep configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("instrument universe is empty")]
    EmptyUniverse,
    #[error("parameter list '{0}' is empty")]
    EmptyParamList(&'static str),
    #[error("starting equity must be positive, got {0}")]
    NonPositiveEquity(f64),
    #[error("trade units must be positive, got {0}")]
    NonPositiveTradeUnits(f64),
}

/// Configuration for one parameter sweep.
///
/// Captures everything needed to reproduce the sweep: the instrument
/// universe, shared trial parameters, data and output locations, and the
/// hyperparameter grid. Immutable for the lifetime of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Ordered instrument universe; the strategy trades the first entry.
    pub instruments: Vec<String>,

    /// Starting account equity per trial.
    pub equity: f64,

    /// Units per order.
    #[serde(default = "default_trade_units")]
    pub trade_units: f64,

    /// Per-iteration pacing delay in milliseconds (zero = no suspension).
    #[serde(default)]
    pub heartbeat_ms: u64,

    /// Iteration cap per trial.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,

    /// Directory holding `<instrument>.csv` price files.
    pub data_dir: PathBuf,

    /// Result log destination.
    pub output: PathBuf,

    /// Hyperparameter grid.
    pub grid: GridConfig,
}

/// Named parameter-value lists for the cartesian-product grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub short_windows: Vec<usize>,
    pub long_windows: Vec<usize>,
}

fn default_trade_units() -> f64 {
    100_000.0
}

fn default_max_iterations() -> u64 {
    10_000_000_000
}

impl SweepConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation.
    ///
    /// Deliberately does not constrain grid contents beyond non-emptiness:
    /// every combination in the grid runs, degenerate or not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instruments.is_empty() {
            return Err(ConfigError::EmptyUniverse);
        }
        if self.grid.short_windows.is_empty() {
            return Err(ConfigError::EmptyParamList("short_windows"));
        }
        if self.grid.long_windows.is_empty() {
            return Err(ConfigError::EmptyParamList("long_windows"));
        }
        if self.equity <= 0.0 {
            return Err(ConfigError::NonPositiveEquity(self.equity));
        }
        if self.trade_units <= 0.0 {
            return Err(ConfigError::NonPositiveTradeUnits(self.trade_units));
        }
        Ok(())
    }

    /// Deterministic blake3 fingerprint of the full configuration.
    ///
    /// Two identical configs share a fingerprint, so repeated runs can be
    /// tied back to the exact setup that produced a result log.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("SweepConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

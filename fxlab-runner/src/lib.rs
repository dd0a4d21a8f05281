//! FxLab Runner — parameter-sweep orchestration over the core engine.
//!
//! This crate builds on `fxlab-core` to provide:
//! - Serializable sweep configuration (TOML) with blake3 fingerprinting
//! - The cartesian-product hyperparameter grid
//! - Per-trial component factories
//! - The sequential sweep executor
//! - Trial results and the persisted CSV result log

pub mod config;
pub mod factory;
pub mod grid;
pub mod report;
pub mod result;
pub mod sweep;

pub use config::{ConfigError, GridConfig, SweepConfig};
pub use factory::{CsvTrialFactory, TrialFactory};
pub use grid::{ParamGrid, StrategyParams};
pub use report::{load_result_log, LogError, ResultLog};
pub use result::{SummaryError, TrialResult};
pub use sweep::{run_sweep, SweepError, SweepRunner};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn trial_result_is_send_sync() {
        assert_send::<TrialResult>();
        assert_sync::<TrialResult>();
    }

    #[test]
    fn strategy_params_is_send_sync() {
        assert_send::<StrategyParams>();
        assert_sync::<StrategyParams>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<SweepConfig>();
        assert_sync::<SweepConfig>();
        assert_send::<GridConfig>();
        assert_sync::<GridConfig>();
    }
}

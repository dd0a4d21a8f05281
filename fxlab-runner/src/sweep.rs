//! Sweep orchestration — one independent trial per grid combination.
//!
//! Trials run strictly sequentially, in grid order, each with a freshly
//! constructed queue and component set; results stream to the result log
//! as they complete. Any collaborator failure or malformed summary
//! aborts the whole sweep — there is no partial-result continuation.

use std::path::Path;
use std::time::Duration;

use fxlab_core::driver::SimulationDriver;
use fxlab_core::feed::FeedError;
use thiserror::Error;

use crate::config::{ConfigError, SweepConfig};
use crate::factory::{CsvTrialFactory, TrialFactory};
use crate::grid::{ParamGrid, StrategyParams};
use crate::report::{LogError, ResultLog};
use crate::result::{SummaryError, TrialResult};

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),
    #[error("trial ({params}) produced a malformed summary: {source}")]
    Summary {
        params: StrategyParams,
        #[source]
        source: SummaryError,
    },
    #[error("result log error: {0}")]
    Log(#[from] LogError),
}

/// Executes trials over a hyperparameter grid.
pub struct SweepRunner<F: TrialFactory> {
    factory: F,
    heartbeat: Duration,
    max_iterations: u64,
}

impl<F: TrialFactory> SweepRunner<F> {
    pub fn new(factory: F, heartbeat: Duration, max_iterations: u64) -> Self {
        Self {
            factory,
            heartbeat,
            max_iterations,
        }
    }

    /// Runs the full sweep, writing one result-log row per trial.
    ///
    /// Returns the trial results in grid order.
    pub fn run(&self, grid: &ParamGrid, log_path: &Path) -> Result<Vec<TrialResult>, SweepError> {
        self.run_with_progress(grid, log_path, |_, _, _| {})
    }

    /// Runs the sweep with per-trial progress reporting.
    ///
    /// The callback is invoked after each trial completes with the
    /// 0-based trial index, the total trial count, and the result.
    pub fn run_with_progress<C>(
        &self,
        grid: &ParamGrid,
        log_path: &Path,
        progress: C,
    ) -> Result<Vec<TrialResult>, SweepError>
    where
        C: Fn(usize, usize, &TrialResult),
    {
        let param_sets = grid.param_sets();
        let total = param_sets.len();

        let mut log = ResultLog::create(log_path)?;
        let mut results = Vec::with_capacity(total);
        for (index, params) in param_sets.into_iter().enumerate() {
            let result = self.run_trial(params)?;
            log.append(&result)?;
            progress(index, total, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Runs one trial with freshly constructed components.
    pub fn run_trial(&self, params: StrategyParams) -> Result<TrialResult, SweepError> {
        let driver = SimulationDriver::new(
            self.factory.feed()?,
            self.factory.strategy(&params),
            self.factory.portfolio(),
            self.factory.execution(),
            self.heartbeat,
            self.max_iterations,
        );
        let outcome = driver.run();
        TrialResult::from_summary(params, &outcome.summary)
            .map_err(|source| SweepError::Summary { params, source })
    }
}

/// Full sweep from a validated configuration with the production CSV
/// factory.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<TrialResult>, SweepError> {
    config.validate()?;
    let runner = SweepRunner::new(
        CsvTrialFactory::new(config),
        Duration::from_millis(config.heartbeat_ms),
        config.max_iterations,
    );
    let grid = ParamGrid::from_config(&config.grid);
    runner.run(&grid, &config.output)
}

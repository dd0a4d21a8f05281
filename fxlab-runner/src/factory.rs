//! Per-trial component construction.

use std::path::PathBuf;

use fxlab_core::execution::{ExecutionHandler, SimulatedExecution};
use fxlab_core::feed::{FeedError, HistoricCsvFeed, PriceFeed};
use fxlab_core::portfolio::{BacktestPortfolio, PortfolioManager};
use fxlab_core::strategy::{MaCrossoverStrategy, Strategy};

use crate::config::SweepConfig;
use crate::grid::StrategyParams;

/// Builds the four fresh collaborators for one trial.
///
/// The sweep constructs a new set per hyperparameter combination;
/// nothing is shared or reused across trials, so no state can bleed from
/// one trial into the next.
pub trait TrialFactory {
    fn feed(&self) -> Result<Box<dyn PriceFeed>, FeedError>;
    fn strategy(&self, params: &StrategyParams) -> Box<dyn Strategy>;
    fn portfolio(&self) -> Box<dyn PortfolioManager>;
    fn execution(&self) -> Box<dyn ExecutionHandler>;
}

/// Production factory: historic CSV feed, MA-crossover strategy,
/// backtest portfolio, simulated execution.
#[derive(Debug, Clone)]
pub struct CsvTrialFactory {
    instruments: Vec<String>,
    data_dir: PathBuf,
    equity: f64,
    trade_units: f64,
}

impl CsvTrialFactory {
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            instruments: config.instruments.clone(),
            data_dir: config.data_dir.clone(),
            equity: config.equity,
            trade_units: config.trade_units,
        }
    }
}

impl TrialFactory for CsvTrialFactory {
    fn feed(&self) -> Result<Box<dyn PriceFeed>, FeedError> {
        Ok(Box::new(HistoricCsvFeed::new(
            &self.instruments,
            &self.data_dir,
        )?))
    }

    fn strategy(&self, params: &StrategyParams) -> Box<dyn Strategy> {
        Box::new(MaCrossoverStrategy::new(
            &self.instruments,
            params.short_window,
            params.long_window,
        ))
    }

    fn portfolio(&self) -> Box<dyn PortfolioManager> {
        Box::new(BacktestPortfolio::new(self.equity, self.trade_units))
    }

    fn execution(&self) -> Box<dyn ExecutionHandler> {
        Box::new(SimulatedExecution::new())
    }
}

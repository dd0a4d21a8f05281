//! FxLab Core — event taxonomy, queue discipline, and the dispatch loop.
//!
//! This crate contains the heart of the backtesting engine:
//! - Domain types (ticks, signals, orders)
//! - FIFO event queue with non-blocking try-pop
//! - The per-trial simulation driver (try-pop-else-advance dispatch loop)
//! - Collaborator traits at the four seams (feed, strategy, portfolio,
//!   execution) and concrete implementations of each
//! - Pure performance-metric functions over the equity curve

pub mod domain;
pub mod driver;
pub mod event;
pub mod execution;
pub mod feed;
pub mod portfolio;
pub mod strategy;

pub use domain::{Direction, Instrument, OrderEvent, SignalEvent, TickEvent};
pub use driver::{DriverState, SimulationDriver, TrialOutcome};
pub use event::{Event, EventQueue};
pub use execution::{ExecutionHandler, Fill, SimulatedExecution};
pub use feed::{generate_ticks, write_price_file, FeedError, HistoricCsvFeed, PriceFeed, SyntheticFeed};
pub use portfolio::{BacktestPortfolio, PortfolioManager, Position};
pub use strategy::{MaCrossoverStrategy, Strategy};

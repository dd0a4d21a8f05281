//! Simulation driver — the per-trial dispatch loop.
//!
//! Polls the event queue; when idle, pulls the feed. Dispatches strictly
//! by event kind, one event per iteration, so each tick is fully drained
//! (strategy and portfolio reaction, including cascaded signals and
//! orders) before the next tick is admitted. The feed is pulled only
//! when the queue is observed empty.

use std::time::Duration;

use crate::event::{Event, EventQueue};
use crate::execution::ExecutionHandler;
use crate::feed::PriceFeed;
use crate::portfolio::PortfolioManager;
use crate::strategy::Strategy;

/// Driver lifecycle. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Terminated,
}

/// Outcome of a completed trial.
#[derive(Debug)]
pub struct TrialOutcome {
    /// The portfolio's five-statistic summary, produced exactly once.
    pub summary: Vec<(String, String)>,
    /// Loop iterations consumed (polls, not dispatched events).
    pub iterations: u64,
}

/// Owns the event queue and the four collaborators for one trial and
/// runs the dispatch loop to termination.
pub struct SimulationDriver {
    queue: EventQueue,
    feed: Box<dyn PriceFeed>,
    strategy: Box<dyn Strategy>,
    portfolio: Box<dyn PortfolioManager>,
    execution: Box<dyn ExecutionHandler>,
    heartbeat: Duration,
    max_iterations: u64,
    iterations: u64,
    state: DriverState,
}

impl SimulationDriver {
    pub fn new(
        feed: Box<dyn PriceFeed>,
        strategy: Box<dyn Strategy>,
        portfolio: Box<dyn PortfolioManager>,
        execution: Box<dyn ExecutionHandler>,
        heartbeat: Duration,
        max_iterations: u64,
    ) -> Self {
        Self {
            queue: EventQueue::new(),
            feed,
            strategy,
            portfolio,
            execution,
            heartbeat,
            max_iterations,
            iterations: 0,
            state: DriverState::Running,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Runs the loop until the iteration cap is reached or the feed
    /// exhausts, then asks the portfolio for its summary.
    ///
    /// Consumes the driver: a trial runs once, and `summarize` is called
    /// exactly once, at termination.
    pub fn run(mut self) -> TrialOutcome {
        while self.state == DriverState::Running {
            if self.iterations >= self.max_iterations || !self.feed.has_more_data() {
                self.state = DriverState::Terminated;
                break;
            }
            self.step();
        }
        TrialOutcome {
            summary: self.portfolio.summarize(),
            iterations: self.iterations,
        }
    }

    /// One iteration: try-pop, else advance the feed; dispatch by kind;
    /// pace; count.
    fn step(&mut self) {
        match self.queue.try_pop() {
            None => self.feed.advance(&mut self.queue),
            Some(Event::Tick(tick)) => {
                // The strategy sees the tick before portfolio bookkeeping:
                // its signal for this tick queues behind the tick itself.
                self.strategy.on_tick(&tick, &mut self.queue);
                self.portfolio.on_tick(&tick);
            }
            Some(Event::Signal(signal)) => self.portfolio.on_signal(&signal, &mut self.queue),
            Some(Event::Order(order)) => self.execution.on_order(&order),
        }

        if !self.heartbeat.is_zero() {
            std::thread::sleep(self.heartbeat);
        }
        self.iterations += 1;
    }
}

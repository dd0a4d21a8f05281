//! Portfolio accounting — equity bookkeeping and signal-to-order sizing.

pub mod performance;
mod position;

pub use position::Position;

use std::collections::HashMap;

use crate::domain::{Direction, OrderEvent, SignalEvent, TickEvent};
use crate::event::{Event, EventQueue};

/// Consumer of tick events (mark-to-market bookkeeping) and signal
/// events (order production).
///
/// `summarize` returns the fixed five-statistic performance summary as
/// display-formatted label/value pairs, in order: total return, CAGR,
/// Sharpe ratio, max drawdown, drawdown duration. Percentage statistics
/// carry a trailing `%`. It is called exactly once, at trial end.
pub trait PortfolioManager {
    fn on_tick(&mut self, tick: &TickEvent);
    fn on_signal(&mut self, signal: &SignalEvent, queue: &mut EventQueue);
    fn summarize(&self) -> Vec<(String, String)>;
}

/// Mark-to-market portfolio for one backtest trial.
///
/// Signals are sized into fixed-unit orders; the position is adjusted at
/// the prevailing quote when the signal is handled (buys at the ask,
/// sells at the bid) and the matching order event is pushed for the
/// execution handler. One equity observation is appended per tick.
#[derive(Debug)]
pub struct BacktestPortfolio {
    balance: f64,
    trade_units: f64,
    positions: HashMap<String, Position>,
    quotes: HashMap<String, (f64, f64)>,
    equity_curve: Vec<f64>,
}

impl BacktestPortfolio {
    pub fn new(starting_equity: f64, trade_units: f64) -> Self {
        Self {
            balance: starting_equity,
            trade_units,
            positions: HashMap::new(),
            quotes: HashMap::new(),
            equity_curve: vec![starting_equity],
        }
    }

    /// Realized balance plus open positions marked at the latest mids.
    pub fn equity(&self) -> f64 {
        let unrealized: f64 = self
            .positions
            .iter()
            .filter_map(|(instrument, position)| {
                let (bid, ask) = self.quotes.get(instrument)?;
                Some(position.unrealized((bid + ask) / 2.0))
            })
            .sum();
        self.balance + unrealized
    }

    pub fn equity_curve(&self) -> &[f64] {
        &self.equity_curve
    }

    pub fn position(&self, instrument: &str) -> Option<&Position> {
        self.positions.get(instrument)
    }
}

impl PortfolioManager for BacktestPortfolio {
    fn on_tick(&mut self, tick: &TickEvent) {
        self.quotes
            .insert(tick.instrument.clone(), (tick.bid, tick.ask));
        self.equity_curve.push(self.equity());
    }

    fn on_signal(&mut self, signal: &SignalEvent, queue: &mut EventQueue) {
        // A signal can only follow a tick for its instrument, so a quote
        // is normally present; without one there is no price to trade at.
        let Some(&(bid, ask)) = self.quotes.get(&signal.instrument) else {
            return;
        };

        let (delta, price) = match signal.direction {
            Direction::Long => (self.trade_units, ask),
            Direction::Short => (-self.trade_units, bid),
        };
        let realized = self
            .positions
            .entry(signal.instrument.clone())
            .or_default()
            .apply(delta, price);
        self.balance += realized;

        queue.push(Event::Order(OrderEvent {
            instrument: signal.instrument.clone(),
            direction: signal.direction,
            units: self.trade_units,
        }));
    }

    fn summarize(&self) -> Vec<(String, String)> {
        let total_return = performance::total_return(&self.equity_curve);
        let cagr = performance::cagr(&self.equity_curve);
        let sharpe = performance::sharpe_ratio(&self.equity_curve);
        let (max_dd, dd_duration) = performance::max_drawdown(&self.equity_curve);

        vec![
            ("Total Return".to_string(), format!("{:.2}%", total_return * 100.0)),
            ("CAGR".to_string(), format!("{:.2}%", cagr * 100.0)),
            ("Sharpe Ratio".to_string(), format!("{sharpe:.2}")),
            ("Max Drawdown".to_string(), format!("{:.2}%", max_dd * 100.0)),
            ("Drawdown Duration".to_string(), format!("{dd_duration}")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta};

    fn tick(second: i64, bid: f64, ask: f64) -> TickEvent {
        TickEvent {
            instrument: "GBPUSD".into(),
            time: DateTime::UNIX_EPOCH + TimeDelta::seconds(second),
            bid,
            ask,
        }
    }

    fn long_signal() -> SignalEvent {
        SignalEvent {
            instrument: "GBPUSD".into(),
            direction: Direction::Long,
            strength: 1.0,
        }
    }

    #[test]
    fn equity_curve_appends_per_tick() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        portfolio.on_tick(&tick(0, 1.0, 1.0002));
        portfolio.on_tick(&tick(1, 1.1, 1.1002));
        assert_eq!(portfolio.equity_curve().len(), 3);
        assert_eq!(portfolio.equity_curve()[0], 100_000.0);
    }

    #[test]
    fn signal_opens_position_and_pushes_order() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        let mut queue = EventQueue::new();

        portfolio.on_tick(&tick(0, 1.0, 1.0002));
        portfolio.on_signal(&long_signal(), &mut queue);

        let position = portfolio.position("GBPUSD").unwrap();
        assert_eq!(position.units, 1_000.0);
        assert_eq!(position.avg_price, 1.0002);

        match queue.try_pop() {
            Some(Event::Order(order)) => {
                assert_eq!(order.instrument, "GBPUSD");
                assert_eq!(order.direction, Direction::Long);
                assert_eq!(order.units, 1_000.0);
            }
            other => panic!("expected order event, got {other:?}"),
        }
    }

    #[test]
    fn long_position_gains_on_rising_mid() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        let mut queue = EventQueue::new();

        portfolio.on_tick(&tick(0, 0.9999, 1.0001));
        portfolio.on_signal(&long_signal(), &mut queue);
        portfolio.on_tick(&tick(1, 1.0999, 1.1001));

        // Bought 1000 at 1.0001, marked at mid 1.1: +99.9.
        let last = *portfolio.equity_curve().last().unwrap();
        assert!((last - 100_099.9).abs() < 1e-6);
    }

    #[test]
    fn close_realizes_into_balance() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        let mut queue = EventQueue::new();

        portfolio.on_tick(&tick(0, 0.9999, 1.0001));
        portfolio.on_signal(&long_signal(), &mut queue);

        portfolio.on_tick(&tick(1, 1.0999, 1.1001));
        let short = SignalEvent {
            instrument: "GBPUSD".into(),
            direction: Direction::Short,
            strength: 1.0,
        };
        portfolio.on_signal(&short, &mut queue);

        // Long closed at the bid 1.0999: realized (1.0999 - 1.0001) * 1000.
        assert!((portfolio.balance - 100_099.8).abs() < 1e-6);
        assert!(portfolio.position("GBPUSD").unwrap().is_flat());
    }

    #[test]
    fn signal_without_quote_is_ignored() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        let mut queue = EventQueue::new();
        portfolio.on_signal(&long_signal(), &mut queue);
        assert!(queue.is_empty());
        assert!(portfolio.position("GBPUSD").is_none());
    }

    #[test]
    fn summarize_has_five_labeled_statistics() {
        let mut portfolio = BacktestPortfolio::new(100_000.0, 1_000.0);
        portfolio.on_tick(&tick(0, 1.0, 1.0002));
        let summary = portfolio.summarize();

        let labels: Vec<&str> = summary.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Total Return",
                "CAGR",
                "Sharpe Ratio",
                "Max Drawdown",
                "Drawdown Duration"
            ]
        );
        assert!(summary[0].1.ends_with('%'));
        assert!(summary[3].1.ends_with('%'));
        // Duration is a bare integer.
        assert!(summary[4].1.parse::<u64>().is_ok());
    }
}

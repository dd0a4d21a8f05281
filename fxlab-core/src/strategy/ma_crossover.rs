//! Moving average crossover strategy — golden cross and death cross over
//! the tick mid price.
//!
//! Fires Long when the short average crosses above the long average, and
//! Short when it crosses below. At most one signal per tick.

use std::collections::VecDeque;

use super::Strategy;
use crate::domain::{Direction, SignalEvent, TickEvent};
use crate::event::{Event, EventQueue};

/// Exact simple moving average over a fixed window.
#[derive(Debug)]
struct RollingMean {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl RollingMean {
    fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            values: VecDeque::new(),
            sum: 0.0,
        }
    }

    fn push(&mut self, value: f64) -> f64 {
        if self.values.len() == self.window {
            if let Some(evicted) = self.values.pop_front() {
                self.sum -= evicted;
            }
        }
        self.values.push_back(value);
        self.sum += value;
        self.sum / self.values.len() as f64
    }

    fn is_full(&self) -> bool {
        self.values.len() == self.window
    }
}

/// Dual-SMA crossover over the first instrument of the universe.
///
/// The windows are taken as given — a degenerate pair (short >= long)
/// simply never crosses and produces no signals. No signal fires until
/// the long window has filled.
#[derive(Debug)]
pub struct MaCrossoverStrategy {
    instrument: String,
    short: RollingMean,
    long: RollingMean,
    prev: Option<(f64, f64)>,
}

impl MaCrossoverStrategy {
    pub fn new(instruments: &[String], short_window: usize, long_window: usize) -> Self {
        Self {
            instrument: instruments.first().cloned().unwrap_or_default(),
            short: RollingMean::new(short_window),
            long: RollingMean::new(long_window),
            prev: None,
        }
    }
}

impl Strategy for MaCrossoverStrategy {
    fn on_tick(&mut self, tick: &TickEvent, queue: &mut EventQueue) {
        if tick.instrument != self.instrument {
            return;
        }

        let mid = tick.mid();
        let short = self.short.push(mid);
        let long = self.long.push(mid);

        if !self.long.is_full() {
            self.prev = Some((short, long));
            return;
        }

        if let Some((prev_short, prev_long)) = self.prev {
            // Golden cross: short crosses above long.
            if short > long && prev_short <= prev_long {
                queue.push(Event::Signal(SignalEvent {
                    instrument: self.instrument.clone(),
                    direction: Direction::Long,
                    strength: 1.0,
                }));
            // Death cross: short crosses below long.
            } else if short < long && prev_short >= prev_long {
                queue.push(Event::Signal(SignalEvent {
                    instrument: self.instrument.clone(),
                    direction: Direction::Short,
                    strength: 1.0,
                }));
            }
        }
        self.prev = Some((short, long));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta};

    fn tick(instrument: &str, second: i64, mid: f64) -> TickEvent {
        TickEvent {
            instrument: instrument.into(),
            time: DateTime::UNIX_EPOCH + TimeDelta::seconds(second),
            bid: mid - 0.0001,
            ask: mid + 0.0001,
        }
    }

    fn run_mids(strategy: &mut MaCrossoverStrategy, mids: &[f64]) -> Vec<Direction> {
        let mut queue = EventQueue::new();
        for (i, &mid) in mids.iter().enumerate() {
            strategy.on_tick(&tick("GBPUSD", i as i64, mid), &mut queue);
        }
        let mut directions = Vec::new();
        while let Some(event) = queue.try_pop() {
            match event {
                Event::Signal(s) => directions.push(s.direction),
                other => panic!("strategy pushed a non-signal event: {other:?}"),
            }
        }
        directions
    }

    #[test]
    fn rolling_mean_tracks_window() {
        let mut mean = RollingMean::new(3);
        assert_eq!(mean.push(1.0), 1.0);
        assert_eq!(mean.push(2.0), 1.5);
        assert_eq!(mean.push(3.0), 2.0);
        assert!(mean.is_full());
        // Window slides: [2, 3, 4]
        assert_eq!(mean.push(4.0), 3.0);
    }

    #[test]
    fn golden_cross_emits_long() {
        let mut strategy = MaCrossoverStrategy::new(&["GBPUSD".to_string()], 2, 3);
        // Flat warmup, then a jump: short avg overtakes long avg.
        let directions = run_mids(&mut strategy, &[1.0, 1.0, 1.0, 2.0]);
        assert_eq!(directions, vec![Direction::Long]);
    }

    #[test]
    fn death_cross_follows_golden_cross() {
        let mut strategy = MaCrossoverStrategy::new(&["GBPUSD".to_string()], 2, 3);
        let directions = run_mids(&mut strategy, &[1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 0.5, 0.5]);
        assert_eq!(directions, vec![Direction::Long, Direction::Short]);
    }

    #[test]
    fn no_signal_during_warmup() {
        let mut strategy = MaCrossoverStrategy::new(&["GBPUSD".to_string()], 2, 5);
        let directions = run_mids(&mut strategy, &[1.0, 2.0, 3.0, 4.0]);
        assert!(directions.is_empty());
    }

    #[test]
    fn other_instruments_are_ignored() {
        let mut strategy = MaCrossoverStrategy::new(&["GBPUSD".to_string()], 2, 3);
        let mut queue = EventQueue::new();
        for i in 0..10 {
            strategy.on_tick(&tick("EURUSD", i, 1.0 + i as f64), &mut queue);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_windows_never_cross() {
        let mut strategy = MaCrossoverStrategy::new(&["GBPUSD".to_string()], 3, 3);
        let directions = run_mids(&mut strategy, &[1.0, 1.5, 0.5, 2.0, 0.3, 3.0, 1.0]);
        assert!(directions.is_empty());
    }
}

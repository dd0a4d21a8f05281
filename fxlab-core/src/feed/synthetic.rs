//! Synthetic tick source — seeded random walk for smoke runs and benches.

use chrono::{DateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::PriceFeed;
use crate::domain::TickEvent;
use crate::event::{Event, EventQueue};

// 2024-01-02 00:00:00 UTC, one tick per second from there.
const EPOCH_OFFSET_DAYS: i64 = 19_724;
const START_MID: f64 = 1.5;
const SPREAD: f64 = 0.0002;

/// Generates a deterministic random-walk tick series for one instrument.
///
/// The same `(instrument, count, seed)` always produces the same series.
pub fn generate_ticks(instrument: &str, count: u64, seed: u64) -> Vec<TickEvent> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = DateTime::UNIX_EPOCH + TimeDelta::days(EPOCH_OFFSET_DAYS);

    let mut mid = START_MID;
    let mut ticks = Vec::with_capacity(count as usize);
    for i in 0..count {
        mid *= 1.0 + rng.gen_range(-0.0005..0.0005);
        ticks.push(TickEvent {
            instrument: instrument.to_string(),
            time: start + TimeDelta::seconds(i as i64),
            bid: mid - SPREAD / 2.0,
            ask: mid + SPREAD / 2.0,
        });
    }
    ticks
}

/// Random-walk feed over an instrument universe.
///
/// Each instrument walks under its own child seed derived from the base
/// seed, so adding an instrument does not perturb the others' series.
#[derive(Debug)]
pub struct SyntheticFeed {
    ticks: std::vec::IntoIter<TickEvent>,
    exhausted: bool,
}

impl SyntheticFeed {
    pub fn new(instruments: &[String], ticks_per_instrument: u64, seed: u64) -> Self {
        let mut all = Vec::new();
        for (i, instrument) in instruments.iter().enumerate() {
            all.extend(generate_ticks(
                instrument,
                ticks_per_instrument,
                seed.wrapping_add(i as u64),
            ));
        }
        all.sort_by_key(|t| t.time);
        Self {
            ticks: all.into_iter(),
            exhausted: false,
        }
    }
}

impl PriceFeed for SyntheticFeed {
    fn has_more_data(&self) -> bool {
        !self.exhausted
    }

    fn advance(&mut self, queue: &mut EventQueue) {
        match self.ticks.next() {
            Some(tick) => queue.push(Event::Tick(tick)),
            None => self.exhausted = true,
        }
    }
}

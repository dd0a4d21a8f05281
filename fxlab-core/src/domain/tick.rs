//! Tick — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped bid/ask observation for a single instrument.
///
/// Ticks are immutable once enqueued: the feed creates them, the queue
/// owns them until dequeued, and the dispatch loop owns them for the
/// duration of the handling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub bid: f64,
    pub ask: f64,
}

impl TickEvent {
    /// Midpoint of bid and ask.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Basic quote sanity check: finite, positive, ask >= bid.
    pub fn is_sane(&self) -> bool {
        self.bid.is_finite() && self.ask.is_finite() && self.bid > 0.0 && self.ask >= self.bid
    }
}

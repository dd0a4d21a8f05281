//! Signals — a strategy's directional opinion, not yet sized into an order.

use serde::{Deserialize, Serialize};

/// Trade direction carried by signals and orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

/// Directional opinion derived from ticks.
///
/// `strength` is a unitless conviction weight in `[0, 1]`; the portfolio
/// decides how (or whether) to size it into an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub instrument: String,
    pub direction: Direction,
    pub strength: f64,
}

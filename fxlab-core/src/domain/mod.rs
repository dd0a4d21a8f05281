//! Domain types for fxlab

pub mod order;
pub mod signal;
pub mod tick;

pub use order::OrderEvent;
pub use signal::{Direction, SignalEvent};
pub use tick::TickEvent;

/// Instrument identifier type alias
pub type Instrument = String;

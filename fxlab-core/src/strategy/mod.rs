//! Strategies — consume ticks, emit directional signals.

mod ma_crossover;

pub use ma_crossover::MaCrossoverStrategy;

use crate::domain::TickEvent;
use crate::event::EventQueue;

/// Consumer of tick events; may push signal events.
///
/// One fresh instance is constructed per trial; implementations must not
/// retain state across trials.
pub trait Strategy {
    fn on_tick(&mut self, tick: &TickEvent, queue: &mut EventQueue);
}

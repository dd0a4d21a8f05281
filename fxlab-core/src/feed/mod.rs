//! Price feeds — tick producers over historical or synthetic sources.

mod csv_feed;
mod synthetic;

pub use csv_feed::{write_price_file, FeedError, HistoricCsvFeed};
pub use synthetic::{generate_ticks, SyntheticFeed};

use crate::event::EventQueue;

/// A producer of tick events from a historical source.
///
/// The driver calls `advance` only when it observes an empty queue; each
/// call pushes zero or one tick. Exhaustion detection is the feed's own
/// responsibility: `has_more_data` flips to false once the source is
/// consumed, and stays false.
pub trait PriceFeed {
    fn has_more_data(&self) -> bool;
    fn advance(&mut self, queue: &mut EventQueue);
}

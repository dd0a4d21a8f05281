//! Historic CSV price feed.
//!
//! One file per instrument under the data directory, named
//! `<instrument>.csv`, with `time,bid,ask` columns and
//! `%Y-%m-%d %H:%M:%S%.f` timestamps. All files are loaded eagerly at
//! construction and merged into a single timestamp-ordered stream; ties
//! keep the instrument-universe order.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::PriceFeed;
use crate::domain::TickEvent;
use crate::event::{Event, EventQueue};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Errors from reading or writing price files.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("price file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("price file {path}, row {row}: {message}")]
    Parse {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    time: String,
    bid: f64,
    ask: f64,
}

/// Streams historical ticks for a set of instruments, one per `advance`.
#[derive(Debug)]
pub struct HistoricCsvFeed {
    ticks: std::vec::IntoIter<TickEvent>,
    exhausted: bool,
}

impl HistoricCsvFeed {
    /// Loads `<instrument>.csv` for every instrument in the universe and
    /// merges the rows by timestamp.
    pub fn new(instruments: &[String], data_dir: &Path) -> Result<Self, FeedError> {
        let mut all = Vec::new();
        for instrument in instruments {
            let path = data_dir.join(format!("{instrument}.csv"));
            all.extend(load_instrument(&path, instrument)?);
        }
        // Stable sort: same-timestamp rows keep instrument-universe order.
        all.sort_by_key(|t| t.time);
        Ok(Self::from_ticks(all))
    }

    /// Wraps an already-ordered tick sequence.
    pub fn from_ticks(ticks: Vec<TickEvent>) -> Self {
        Self {
            ticks: ticks.into_iter(),
            exhausted: false,
        }
    }
}

impl PriceFeed for HistoricCsvFeed {
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

fn load_instrument(path: &Path, instrument: &str) -> Result<Vec<TickEvent>, FeedError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| FeedError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut ticks = Vec::new();
    for (index, record) in reader.deserialize::<PriceRow>().enumerate() {
        // Row 1 is the header.
        let row = index + 2;
        let record = record.map_err(|source| FeedError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let time = NaiveDateTime::parse_from_str(&record.time, TIME_FORMAT)
            .map_err(|e| FeedError::Parse {
                path: path.to_path_buf(),
                row,
                message: format!("bad timestamp '{}': {e}", record.time),
            })?
            .and_utc();

        let tick = TickEvent {
            instrument: instrument.to_string(),
            time,
            bid: record.bid,
            ask: record.ask,
        };
        if !tick.is_sane() {
            return Err(FeedError::Parse {
                path: path.to_path_buf(),
                row,
                message: format!("invalid quote bid={} ask={}", tick.bid, tick.ask),
            });
        }
        ticks.push(tick);
    }
    Ok(ticks)
}

/// Writes one instrument's ticks as a `time,bid,ask` price file.
pub fn write_price_file(path: &Path, ticks: &[TickEvent]) -> Result<(), FeedError> {
    let to_err = |source| FeedError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_err)?;
    writer.write_record(["time", "bid", "ask"]).map_err(to_err)?;
    for tick in ticks {
        writer
            .write_record([
                tick.time.format(TIME_FORMAT).to_string(),
                tick.bid.to_string(),
                tick.ask.to_string(),
            ])
            .map_err(to_err)?;
    }
    writer.flush().map_err(|source| FeedError::Csv {
        path: path.to_path_buf(),
        source: csv::Error::from(source),
    })
}

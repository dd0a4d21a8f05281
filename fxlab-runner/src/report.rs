//! Result log — the persisted sweep artifact.
//!
//! A delimited text file, one 7-field row per trial in run order:
//! `short_window,long_window,total_return,cagr,sharpe,max_drawdown,drawdown_duration`
//! No header row. The file is created fresh (truncated) at sweep start
//! and every row is flushed as it is written.

use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::result::TrialResult;

/// Errors from writing or reading the result log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("result log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("result log {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Append-only writer over the result log for one sweep.
pub struct ResultLog {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl ResultLog {
    /// Creates the log file, truncating any previous content.
    pub fn create(path: &Path) -> Result<Self, LogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| LogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = File::create(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    /// Appends one row and flushes it to disk.
    pub fn append(&mut self, result: &TrialResult) -> Result<(), LogError> {
        self.writer
            .serialize(result)
            .map_err(|source| LogError::Csv {
                path: self.path.clone(),
                source,
            })?;
        self.writer.flush().map_err(|source| LogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Reads a result log back into trial results, in file order.
pub fn load_result_log(path: &Path) -> Result<Vec<TrialResult>, LogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| LogError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LogError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

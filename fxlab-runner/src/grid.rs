//! Hyperparameter grid — cartesian product in row-major order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;

/// One point in the grid: the swept strategy hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyParams {
    pub short_window: usize,
    pub long_window: usize,
}

impl fmt::Display for StrategyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "short_window={} long_window={}",
            self.short_window, self.long_window
        )
    }
}

/// Cartesian-product grid over the named parameter-value lists.
#[derive(Debug, Clone)]
pub struct ParamGrid {
    pub short_windows: Vec<usize>,
    pub long_windows: Vec<usize>,
}

impl ParamGrid {
    pub fn new(short_windows: Vec<usize>, long_windows: Vec<usize>) -> Self {
        Self {
            short_windows,
            long_windows,
        }
    }

    pub fn from_config(grid: &GridConfig) -> Self {
        Self::new(grid.short_windows.clone(), grid.long_windows.clone())
    }

    /// Total number of combinations: the product of the list lengths.
    pub fn size(&self) -> usize {
        self.short_windows.len() * self.long_windows.len()
    }

    /// All combinations, first list outer (row-major).
    ///
    /// Every combination appears exactly once — nothing is filtered, even
    /// degenerate pairs (short >= long); those trials simply produce no
    /// crossovers.
    pub fn param_sets(&self) -> Vec<StrategyParams> {
        let mut sets = Vec::with_capacity(self.size());
        for &short_window in &self.short_windows {
            for &long_window in &self.long_windows {
                sets.push(StrategyParams {
                    short_window,
                    long_window,
                });
            }
        }
        sets
    }
}

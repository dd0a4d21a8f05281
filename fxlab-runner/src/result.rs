//! Trial results — one immutable row per completed trial.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::StrategyParams;

/// The five summary statistics, in contract order.
const LABELS: [&str; 5] = [
    "Total Return",
    "CAGR",
    "Sharpe Ratio",
    "Max Drawdown",
    "Drawdown Duration",
];

/// A malformed or missing portfolio summary statistic.
///
/// Fatal for the sweep: simulation correctness cannot be guaranteed once
/// a collaborator misreports, so there is no partial recovery.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary statistic {index} ('{label}') is missing")]
    Missing { index: usize, label: &'static str },
    #[error("summary statistic '{label}' has non-numeric value '{value}'")]
    NonNumeric { label: &'static str, value: String },
}

/// Performance row for one trial: the swept hyperparameters plus the
/// fixed five-statistic summary, percent decoration stripped.
///
/// Field order is the result-log record shape; never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub short_window: usize,
    pub long_window: usize,
    pub total_return: f64,
    pub cagr: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
    pub drawdown_duration: u64,
}

impl TrialResult {
    pub fn params(&self) -> StrategyParams {
        StrategyParams {
            short_window: self.short_window,
            long_window: self.long_window,
        }
    }

    /// Parses a portfolio summary into a result row.
    ///
    /// The summary contract is positional: total return %, CAGR %,
    /// Sharpe, max drawdown %, drawdown duration. Percent signs are
    /// stripped; values are coerced to numbers.
    pub fn from_summary(
        params: StrategyParams,
        summary: &[(String, String)],
    ) -> Result<Self, SummaryError> {
        Ok(Self {
            short_window: params.short_window,
            long_window: params.long_window,
            total_return: numeric_stat(summary, 0)?,
            cagr: numeric_stat(summary, 1)?,
            sharpe: numeric_stat(summary, 2)?,
            max_drawdown: numeric_stat(summary, 3)?,
            drawdown_duration: integer_stat(summary, 4)?,
        })
    }
}

fn stat_value(summary: &[(String, String)], index: usize) -> Result<&str, SummaryError> {
    summary
        .get(index)
        .map(|(_, value)| value.as_str())
        .ok_or(SummaryError::Missing {
            index,
            label: LABELS[index],
        })
}

fn numeric_stat(summary: &[(String, String)], index: usize) -> Result<f64, SummaryError> {
    let raw = stat_value(summary, index)?;
    raw.trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| SummaryError::NonNumeric {
            label: LABELS[index],
            value: raw.to_string(),
        })
}

fn integer_stat(summary: &[(String, String)], index: usize) -> Result<u64, SummaryError> {
    let raw = stat_value(summary, index)?;
    raw.trim().parse().map_err(|_| SummaryError::NonNumeric {
        label: LABELS[index],
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StrategyParams {
        StrategyParams {
            short_window: 100,
            long_window: 1000,
        }
    }

    fn summary() -> Vec<(String, String)> {
        vec![
            ("Total Return".into(), "25.32%".into()),
            ("CAGR".into(), "3.45%".into()),
            ("Sharpe Ratio".into(), "1.25".into()),
            ("Max Drawdown".into(), "12.50%".into()),
            ("Drawdown Duration".into(), "123".into()),
        ]
    }

    #[test]
    fn parses_and_strips_percent_signs() {
        let result = TrialResult::from_summary(params(), &summary()).unwrap();
        assert_eq!(result.short_window, 100);
        assert_eq!(result.long_window, 1000);
        assert!((result.total_return - 25.32).abs() < 1e-12);
        assert!((result.cagr - 3.45).abs() < 1e-12);
        assert!((result.sharpe - 1.25).abs() < 1e-12);
        assert!((result.max_drawdown - 12.5).abs() < 1e-12);
        assert_eq!(result.drawdown_duration, 123);
    }

    #[test]
    fn missing_statistic_is_fatal() {
        let mut short = summary();
        short.truncate(3);
        let err = TrialResult::from_summary(params(), &short).unwrap_err();
        assert!(matches!(err, SummaryError::Missing { index: 3, .. }));
        assert!(err.to_string().contains("Max Drawdown"));
    }

    #[test]
    fn non_numeric_statistic_is_fatal() {
        let mut bad = summary();
        bad[2].1 = "n/a".into();
        let err = TrialResult::from_summary(params(), &bad).unwrap_err();
        assert!(err.to_string().contains("Sharpe Ratio"));
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn negative_duration_is_fatal() {
        let mut bad = summary();
        bad[4].1 = "-3".into();
        assert!(TrialResult::from_summary(params(), &bad).is_err());
    }

    #[test]
    fn params_roundtrip() {
        let result = TrialResult::from_summary(params(), &summary()).unwrap();
        assert_eq!(result.params(), params());
    }
}

//! Performance metrics — pure functions over an equity curve.
//!
//! Every metric is equity curve in, scalar out; no dependency on the
//! portfolio, driver, or feeds. Degenerate inputs (short or constant
//! curves) return 0 rather than NaN.

/// Total return as a fraction: (final - initial) / initial.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    let final_eq = equity_curve[equity_curve.len() - 1];
    if initial <= 0.0 {
        return 0.0;
    }
    (final_eq - initial) / initial
}

/// Compound annual growth rate.
///
/// Observations are treated as daily with 252 trading days per year.
pub fn cagr(equity_curve: &[f64]) -> f64 {
    if equity_curve.len() < 2 {
        return 0.0;
    }
    let initial = equity_curve[0];
    let final_eq = equity_curve[equity_curve.len() - 1];
    if initial <= 0.0 || final_eq <= 0.0 {
        return 0.0;
    }
    let years = equity_curve.len() as f64 / 252.0;
    (final_eq / initial).powf(1.0 / years) - 1.0
}

/// Annualized Sharpe ratio over per-observation returns, zero risk-free.
///
/// Returns 0.0 when there are fewer than two returns or zero variance.
pub fn sharpe_ratio(equity_curve: &[f64]) -> f64 {
    let returns = observation_returns(equity_curve);
    if returns.len() < 2 {
        return 0.0;
    }
    let mean = mean(&returns);
    let std = std_dev(&returns);
    if std < 1e-15 {
        return 0.0;
    }
    (mean / std) * (252.0_f64).sqrt()
}

/// Maximum drawdown and longest drawdown duration.
///
/// Drawdown is a positive fraction of the running peak (0.25 = 25%
/// decline); duration is the longest run of observations spent below a
/// prior peak. A monotonically rising curve yields (0.0, 0).
pub fn max_drawdown(equity_curve: &[f64]) -> (f64, usize) {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;
    let mut duration = 0_usize;
    let mut max_duration = 0_usize;

    for &equity in equity_curve {
        if equity >= peak {
            peak = equity;
            duration = 0;
        } else {
            duration += 1;
            max_duration = max_duration.max(duration);
            if peak > 0.0 {
                max_dd = max_dd.max((peak - equity) / peak);
            }
        }
    }
    (max_dd, max_duration)
}

fn observation_returns(equity_curve: &[f64]) -> Vec<f64> {
    equity_curve
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

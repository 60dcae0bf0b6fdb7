//! Volatility, drawdown, and risk-adjusted-return statistics over a daily
//! return series. Stateless: every call recomputes from the window supplied.

use statrs::statistics::Statistics;

/// Trading days per year used for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// Daily fractional returns `(P[i] - P[i-1]) / P[i-1]`; transitions with a
/// zero base price are skipped.
pub fn daily_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Annualized standard deviation of daily returns (`std_dev * sqrt(252)`).
pub fn annualized_volatility(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let sd = returns.std_dev();
    if sd.is_finite() {
        Some(sd * TRADING_DAYS.sqrt())
    } else {
        None
    }
}

/// Largest peak-to-trough decline of the running maximum, as a fraction in
/// [0, 1].
pub fn max_drawdown(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    let mut peak = prices[0];
    let mut worst = 0.0_f64;
    for &price in prices {
        if price > peak {
            peak = price;
        }
        if peak > 0.0 {
            let drawdown = (peak - price) / peak;
            if drawdown > worst {
                worst = drawdown;
            }
        }
    }
    Some(worst)
}

/// Annualized Sharpe ratio: daily excess return over daily standard
/// deviation, scaled by `sqrt(252)`. `None` when volatility is zero.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let mean = returns.mean();
    let sd = returns.std_dev();
    if sd == 0.0 || !sd.is_finite() {
        return None;
    }
    Some((mean - risk_free_rate / TRADING_DAYS) / sd * TRADING_DAYS.sqrt())
}

/// Annualized Sortino ratio: like Sharpe, but the denominator is the
/// deviation of negative returns only. `None` when there are no negative
/// returns to measure downside with.
pub fn sortino_ratio(returns: &[f64], risk_free_rate: f64) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let downside: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    if downside.is_empty() {
        return None;
    }
    let downside_dev = (downside.iter().map(|r| r * r).sum::<f64>() / downside.len() as f64).sqrt();
    if downside_dev == 0.0 {
        return None;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    Some((mean - risk_free_rate / TRADING_DAYS) / downside_dev * TRADING_DAYS.sqrt())
}

/// Value-at-Risk at tail probability `percentile` (e.g. 0.05): the return at
/// that percentile of the sorted distribution. Typically negative.
pub fn value_at_risk(returns: &[f64], percentile: f64) -> Option<f64> {
    if returns.is_empty() || !(0.0..1.0).contains(&percentile) {
        return None;
    }
    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let index = ((returns.len() as f64 * percentile) as usize).min(sorted.len() - 1);
    Some(sorted[index])
}

/// Conditional VaR (expected shortfall): mean of all returns at or below the
/// VaR percentile.
pub fn conditional_var(returns: &[f64], percentile: f64) -> Option<f64> {
    let var = value_at_risk(returns, percentile)?;
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= var).collect();
    if tail.is_empty() {
        return None;
    }
    Some(tail.iter().sum::<f64>() / tail.len() as f64)
}

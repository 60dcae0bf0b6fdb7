//! Trend and momentum indicators over a chronological series.
//!
//! All inputs are ordered oldest first. Each function is a pure read-only
//! transform of the window it is given and returns the latest indicator
//! value, or `None` when the series is shorter than the minimum window.

use metrics_core::Bar;

/// Simple moving average over the trailing `window` values.
pub fn sma(data: &[f64], window: usize) -> Option<f64> {
    if window == 0 || data.len() < window {
        return None;
    }
    let tail = &data[data.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Exponential moving average with smoothing factor `2 / (window + 1)`,
/// seeded with the SMA of the first `window` values.
pub fn ema(data: &[f64], window: usize) -> Option<f64> {
    if window == 0 || data.len() < window {
        return None;
    }
    let multiplier = 2.0 / (window as f64 + 1.0);
    let mut value = data[..window].iter().sum::<f64>() / window as f64;
    for &x in &data[window..] {
        value = (x - value) * multiplier + value;
    }
    Some(value)
}

/// Relative Strength Index with Wilder smoothing, bounded to [0, 100].
/// Needs at least `period + 1` values for the first `period` changes.
pub fn rsi(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(data.len() - 1);
    let mut losses = Vec::with_capacity(data.len() - 1);
    for w in data.windows(2) {
        let change = w[1] - w[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

fn stochastic_k_at(bars: &[Bar], end: usize, k_period: usize) -> Option<f64> {
    if end + 1 < k_period {
        return None;
    }
    let window = &bars[end + 1 - k_period..=end];
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    if highest == lowest {
        // Flat window: conventionally centered
        return Some(50.0);
    }
    Some(100.0 * (bars[end].close - lowest) / (highest - lowest))
}

/// Stochastic oscillator: latest %K over `k_period` bars and %D, the simple
/// average of the last `d_period` %K values. Both in [0, 100].
pub fn stochastic(bars: &[Bar], k_period: usize, d_period: usize) -> (Option<f64>, Option<f64>) {
    if k_period == 0 || d_period == 0 || bars.len() < k_period {
        return (None, None);
    }
    let last = bars.len() - 1;
    let k = stochastic_k_at(bars, last, k_period);

    if bars.len() < k_period + d_period - 1 {
        return (k, None);
    }
    let mut sum = 0.0;
    for back in 0..d_period {
        match stochastic_k_at(bars, last - back, k_period) {
            Some(k_val) => sum += k_val,
            None => return (k, None),
        }
    }
    (k, Some(sum / d_period as f64))
}

/// Williams %R over the trailing `period` bars, bounded to [-100, 0].
pub fn williams_r(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }
    let window = &bars[bars.len() - period..];
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    if highest == lowest {
        return Some(-50.0);
    }
    let close = window.last().map(|b| b.close)?;
    Some(-100.0 * (highest - close) / (highest - lowest))
}

/// Commodity Channel Index over the trailing `period` bars.
pub fn cci(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }
    let window = &bars[bars.len() - period..];
    let typical: Vec<f64> = window
        .iter()
        .map(|b| (b.high + b.low + b.close) / 3.0)
        .collect();
    let mean_tp = typical.iter().sum::<f64>() / period as f64;
    let mean_dev = typical.iter().map(|tp| (tp - mean_tp).abs()).sum::<f64>() / period as f64;
    if mean_dev == 0.0 {
        return None;
    }
    let last_tp = *typical.last()?;
    Some((last_tp - mean_tp) / (0.015 * mean_dev))
}

/// Money Flow Index over the trailing `period` bar-to-bar transitions,
/// bounded to [0, 100]. Needs `period + 1` bars.
pub fn mfi(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }
    let window = &bars[bars.len() - period - 1..];
    let mut positive_flow = 0.0;
    let mut negative_flow = 0.0;
    for w in window.windows(2) {
        let prev_tp = (w[0].high + w[0].low + w[0].close) / 3.0;
        let tp = (w[1].high + w[1].low + w[1].close) / 3.0;
        let raw_flow = tp * w[1].volume;
        if tp > prev_tp {
            positive_flow += raw_flow;
        } else if tp < prev_tp {
            negative_flow += raw_flow;
        }
    }
    if negative_flow == 0.0 {
        return Some(100.0);
    }
    let ratio = positive_flow / negative_flow;
    Some(100.0 - 100.0 / (1.0 + ratio))
}

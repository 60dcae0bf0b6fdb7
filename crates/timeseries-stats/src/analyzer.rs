use metrics_core::{Bar, TechnicalMetrics};

use crate::indicators::*;
use crate::risk::*;

/// Derive the full technical record from a chronological price history.
///
/// Every field degrades independently to `None` when the series is shorter
/// than its window; an empty series yields an all-absent record. The
/// risk-free rate is annual and feeds Sharpe/Sortino.
pub fn compute_technical_metrics(bars: &[Bar], risk_free_rate: Option<f64>) -> TechnicalMetrics {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let returns = daily_returns(&closes);
    let rf = risk_free_rate.unwrap_or(0.0);

    let sma_50 = sma(&closes, 50);
    let sma_200 = sma(&closes, 200);
    let (stoch_k, stoch_d) = stochastic(bars, 14, 3);

    // Cross flags compare the current 50/200 relationship with the one a bar
    // earlier, so they flag the crossover bar itself.
    let (golden_cross, death_cross) = match (sma_50, sma_200, closes.len()) {
        (Some(s50), Some(s200), n) if n > 200 => {
            let prev = &closes[..n - 1];
            match (sma(prev, 50), sma(prev, 200)) {
                (Some(p50), Some(p200)) => (
                    Some(s50 > s200 && p50 <= p200),
                    Some(s50 < s200 && p50 >= p200),
                ),
                _ => (None, None),
            }
        }
        _ => (None, None),
    };

    let momentum_20d = if closes.len() > 20 {
        let base = closes[closes.len() - 21];
        if base != 0.0 {
            Some((closes[closes.len() - 1] - base) / base)
        } else {
            None
        }
    } else {
        None
    };

    TechnicalMetrics {
        sma_20: sma(&closes, 20),
        sma_50,
        sma_200,
        ema_12: ema(&closes, 12),
        ema_26: ema(&closes, 26),
        rsi_14: rsi(&closes, 14),
        stochastic_k: stoch_k,
        stochastic_d: stoch_d,
        williams_r: williams_r(bars, 14),
        cci_20: cci(bars, 20),
        mfi_14: mfi(bars, 14),
        golden_cross,
        death_cross,
        price_above_sma_200: sma_200.and_then(|s| closes.last().map(|c| *c > s)),
        momentum_20d,
        annualized_volatility: annualized_volatility(&returns),
        max_drawdown: max_drawdown(&closes),
        sharpe_ratio: sharpe_ratio(&returns, rf),
        sortino_ratio: sortino_ratio(&returns, rf),
        var_95: value_at_risk(&returns, 0.05),
        cvar_95: conditional_var(&returns, 0.05),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_core::Bar;

    fn bar(day: i64, close: f64) -> Bar {
        Bar {
            timestamp: chrono::DateTime::from_timestamp(day * 86_400, 0).unwrap(),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume: 1_000_000.0,
        }
    }

    #[test]
    fn empty_history_yields_all_absent_record() {
        let record = compute_technical_metrics(&[], Some(0.04));
        assert!(record.sma_20.is_none());
        assert!(record.rsi_14.is_none());
        assert!(record.annualized_volatility.is_none());
        assert!(record.golden_cross.is_none());
        assert!(record.var_95.is_none());
    }

    #[test]
    fn short_history_degrades_only_long_window_fields() {
        let bars: Vec<Bar> = (0..30).map(|i| bar(i, 100.0 + i as f64)).collect();
        let record = compute_technical_metrics(&bars, None);
        assert!(record.sma_20.is_some());
        assert!(record.rsi_14.is_some());
        assert!(record.sma_200.is_none());
        assert!(record.price_above_sma_200.is_none());
    }

    #[test]
    fn rising_series_sets_trend_fields() {
        let bars: Vec<Bar> = (0..260).map(|i| bar(i, 100.0 + i as f64 * 0.5)).collect();
        let record = compute_technical_metrics(&bars, Some(0.04));
        assert_eq!(record.price_above_sma_200, Some(true));
        // Steady uptrend: 50-day already above 200-day, so no fresh cross
        assert_eq!(record.golden_cross, Some(false));
        assert_eq!(record.death_cross, Some(false));
        assert!(record.momentum_20d.unwrap() > 0.0);
        assert_eq!(record.max_drawdown, Some(0.0));
    }
}

//! Top-level derivation pipeline.
//!
//! `MetricsEngine` wires the category calculators together: resolve config,
//! derive shared intermediates once, run each category over the same inputs,
//! then score. The engine holds no state and never fails; missing inputs
//! surface as absent fields in the result, not as errors.

use chrono::Utc;
use tracing::debug;

use fundamental_ratios::{
    cash_flow_metrics, derive_shared, dupont_metrics, efficiency_metrics, growth_metrics,
    leverage_metrics, liquidity_metrics, profitability_metrics, valuation_ratios,
};
use metrics_core::{AggregateResult, Bar, CalculatorConfig, RawSnapshot};

#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full metric set for one snapshot.
    ///
    /// Total over its input domain: any subset of fields may be absent and
    /// every derivable metric is still produced.
    pub fn calculate(&self, snapshot: &RawSnapshot, config: &CalculatorConfig) -> AggregateResult {
        let resolved = config.resolve(snapshot);
        debug!(symbol = %snapshot.symbol, ?resolved, "resolved calculator config");

        let f = &snapshot.fundamentals;
        let derived = derive_shared(f, &resolved);

        let liquidity = liquidity_metrics(f);
        let leverage = leverage_metrics(f, &derived);
        let efficiency = efficiency_metrics(f);
        let profitability = profitability_metrics(f, &derived);
        let dupont = dupont_metrics(f);
        let growth = growth_metrics(f, &snapshot.history);
        let cash_flow = cash_flow_metrics(f, &derived);
        let ratios = valuation_ratios(f, &derived, &growth);
        debug!(symbol = %snapshot.symbol, "fundamental categories derived");

        let bars = ordered_bars(&snapshot.price_history);
        let technical =
            timeseries_stats::compute_technical_metrics(&bars, resolved.risk_free_rate);
        debug!(
            symbol = %snapshot.symbol,
            bars = bars.len(),
            "technical indicators derived"
        );

        let macro_metrics = macro_metrics::macro_relative_metrics(
            &snapshot.macro_indicators,
            &snapshot.industry_data,
            f,
            &ratios,
            &profitability,
        );

        let valuation = valuation_model::valuation_metrics(f, &derived, &growth, &resolved);

        let scores = scoring_engine::score_record(
            &profitability,
            &growth,
            &ratios,
            &cash_flow,
            &valuation,
            &technical,
            f.beta,
            &liquidity,
            &leverage,
        );
        debug!(symbol = %snapshot.symbol, total = ?scores.total, "scores derived");

        AggregateResult {
            symbol: snapshot.symbol.clone(),
            sector: snapshot.sector.clone(),
            industry: snapshot.industry.clone(),
            timestamp: Utc::now(),
            liquidity,
            leverage,
            efficiency,
            profitability,
            dupont,
            growth,
            cash_flow,
            valuation_ratios: ratios,
            technical,
            macro_metrics,
            valuation,
            scores,
        }
    }
}

/// Price history must be chronological. Out-of-order input is repaired on a
/// copy rather than rejected, with a warning.
fn ordered_bars(bars: &[Bar]) -> std::borrow::Cow<'_, [Bar]> {
    let sorted = bars.windows(2).all(|w| w[0].timestamp <= w[1].timestamp);
    if sorted {
        std::borrow::Cow::Borrowed(bars)
    } else {
        tracing::warn!(bars = bars.len(), "price history out of order, sorting");
        let mut copy = bars.to_vec();
        copy.sort_by_key(|b| b.timestamp);
        std::borrow::Cow::Owned(copy)
    }
}

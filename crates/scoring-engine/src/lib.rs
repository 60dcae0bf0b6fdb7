//! Normalization and composite scoring.
//!
//! Raw ratios are rescaled onto [0, 100] against fixed benchmark bands,
//! category scores reweight around missing components, and the total score
//! requires every category to be present.

pub mod benchmarks;

pub use benchmarks::Benchmark;

use metrics_core::kernel::{linear_rescale, weighted_average};
use metrics_core::{
    CashFlowMetrics, GrowthMetrics, LeverageMetrics, LiquidityMetrics, ProfitabilityMetrics,
    ScoreRecord, TechnicalMetrics, ValuationMetrics, ValuationRatios,
};

/// Weights of the five category scores in the total, in record order:
/// profitability, growth, valuation, risk, financial health.
pub const TOTAL_WEIGHTS: [f64; 5] = [0.25, 0.20, 0.20, 0.15, 0.20];

/// Map a raw value onto [0, 100] against a benchmark band: clamp, rescale,
/// and flip when lower is better.
pub fn normalize(value: Option<f64>, benchmark: Benchmark) -> Option<f64> {
    let scaled = linear_rescale(value, benchmark.min, benchmark.max)?;
    if benchmark.higher_is_better {
        Some(scaled)
    } else {
        Some(100.0 - scaled)
    }
}

pub fn profitability_score(p: &ProfitabilityMetrics) -> Option<f64> {
    weighted_average(&[
        (normalize(p.return_on_equity, benchmarks::ROE), 0.25),
        (normalize(p.net_margin, benchmarks::NET_MARGIN), 0.25),
        (normalize(p.operating_margin, benchmarks::OPERATING_MARGIN), 0.20),
        (normalize(p.return_on_assets, benchmarks::ROA), 0.15),
        (normalize(p.return_on_invested_capital, benchmarks::ROIC), 0.15),
    ])
}

pub fn growth_score(g: &GrowthMetrics) -> Option<f64> {
    weighted_average(&[
        (normalize(g.revenue_growth_yoy, benchmarks::REVENUE_GROWTH), 0.30),
        (normalize(g.eps_growth_yoy, benchmarks::EPS_GROWTH), 0.25),
        (normalize(g.revenue_cagr_3y, benchmarks::REVENUE_CAGR), 0.25),
        (normalize(g.fcf_growth_yoy, benchmarks::FCF_GROWTH), 0.20),
    ])
}

pub fn valuation_score(
    v: &ValuationRatios,
    cf: &CashFlowMetrics,
    dcf: &ValuationMetrics,
) -> Option<f64> {
    weighted_average(&[
        (normalize(v.pe_ratio, benchmarks::PE_RATIO), 0.25),
        (normalize(v.pb_ratio, benchmarks::PB_RATIO), 0.15),
        (normalize(v.ev_to_ebitda, benchmarks::EV_TO_EBITDA), 0.20),
        (normalize(cf.fcf_yield, benchmarks::FCF_YIELD), 0.15),
        (normalize(dcf.upside, benchmarks::DCF_UPSIDE), 0.25),
    ])
}

pub fn risk_score(t: &TechnicalMetrics, beta: Option<f64>) -> Option<f64> {
    weighted_average(&[
        (normalize(t.annualized_volatility, benchmarks::VOLATILITY), 0.30),
        (normalize(t.max_drawdown, benchmarks::MAX_DRAWDOWN), 0.25),
        (normalize(t.sharpe_ratio, benchmarks::SHARPE), 0.20),
        (normalize(beta, benchmarks::BETA), 0.15),
        (normalize(t.var_95, benchmarks::VAR_95), 0.10),
    ])
}

pub fn health_score(l: &LiquidityMetrics, lev: &LeverageMetrics) -> Option<f64> {
    weighted_average(&[
        (normalize(l.current_ratio, benchmarks::CURRENT_RATIO), 0.25),
        (normalize(l.quick_ratio, benchmarks::QUICK_RATIO), 0.15),
        (normalize(lev.debt_to_equity, benchmarks::DEBT_TO_EQUITY), 0.30),
        (normalize(lev.interest_coverage, benchmarks::INTEREST_COVERAGE), 0.20),
        (normalize(l.operating_cash_flow_ratio, benchmarks::OCF_RATIO), 0.10),
    ])
}

/// Total composite: a strict conjunction of the five category scores.
///
/// Unlike the category scores, the total does not reweight around a missing
/// category. One absent category makes the total absent.
pub fn total_score(
    profitability: Option<f64>,
    growth: Option<f64>,
    valuation: Option<f64>,
    risk: Option<f64>,
    health: Option<f64>,
) -> Option<f64> {
    let [wp, wg, wv, wr, wh] = TOTAL_WEIGHTS;
    Some(
        profitability? * wp + growth? * wg + valuation? * wv + risk? * wr + health? * wh,
    )
}

/// Assemble the full score record.
#[allow(clippy::too_many_arguments)]
pub fn score_record(
    p: &ProfitabilityMetrics,
    g: &GrowthMetrics,
    v: &ValuationRatios,
    cf: &CashFlowMetrics,
    dcf: &ValuationMetrics,
    t: &TechnicalMetrics,
    beta: Option<f64>,
    l: &LiquidityMetrics,
    lev: &LeverageMetrics,
) -> ScoreRecord {
    let profitability = profitability_score(p);
    let growth = growth_score(g);
    let valuation = valuation_score(v, cf, dcf);
    let risk = risk_score(t, beta);
    let financial_health = health_score(l, lev);
    let total = total_score(profitability, growth, valuation, risk, financial_health);

    ScoreRecord {
        profitability,
        growth,
        valuation,
        risk,
        financial_health,
        total,
    }
}

use metrics_core::kernel::{cagr, pct_change, positive, safe_div, safe_mul, safe_sub};
use metrics_core::{Fundamentals, GrowthMetrics, HistoricalFigures, RecentFirst};

/// Year-over-year growth: latest period (index 0) against the prior one
/// (index 1).
fn yoy(series: &RecentFirst) -> Option<f64> {
    pct_change(series.latest(), series.periods_back(1))
}

/// N-year CAGR: index 0 against index N, requiring the array to reach back
/// `years + 1` periods with a positive base.
fn cagr_over(series: &RecentFirst, years: usize) -> Option<f64> {
    if series.len() < years + 1 {
        return None;
    }
    cagr(series.latest(), series.periods_back(years), years as f64)
}

/// Growth rates from the most-recent-first historical arrays.
///
/// Revenue YoY falls back to the provider's reported growth figure when the
/// array cannot produce one.
pub fn growth_metrics(f: &Fundamentals, h: &HistoricalFigures) -> GrowthMetrics {
    // Sustainable growth = ROE * (1 - payout), only defined for profitable
    // companies with equity
    let roe = safe_div(f.net_income, positive(f.total_equity));
    let payout = safe_div(f.dividends_paid, positive(f.net_income));
    let sustainable_growth_rate = safe_mul(roe, safe_sub(Some(1.0), payout));

    GrowthMetrics {
        revenue_growth_yoy: yoy(&h.revenue).or(f.revenue_growth),
        net_income_growth_yoy: yoy(&h.net_income),
        eps_growth_yoy: yoy(&h.eps),
        dividend_growth_yoy: yoy(&h.dividends_per_share),
        fcf_growth_yoy: yoy(&h.free_cash_flow),
        revenue_cagr_3y: cagr_over(&h.revenue, 3),
        revenue_cagr_5y: cagr_over(&h.revenue, 5),
        net_income_cagr_3y: cagr_over(&h.net_income, 3),
        eps_cagr_5y: cagr_over(&h.eps, 5),
        sustainable_growth_rate,
    }
}

//! Macro-series transforms and industry relative-position metrics.
//!
//! Pure pass-through derivations: a missing macro field degrades only the
//! metrics that reference it, and concentration indices are absent for
//! empty or zero-revenue competitor sets.

use metrics_core::kernel::{positive, safe_div, safe_sub};
use metrics_core::{
    Fundamentals, IndustryData, MacroIndicators, MacroMetrics, ProfitabilityMetrics,
    ValuationRatios,
};

/// Derive the full macro and relative-position record.
///
/// The relative multiples divide the already-derived absolute figures by the
/// industry averages, so they can never disagree with the ratio records.
pub fn macro_relative_metrics(
    m: &MacroIndicators,
    industry: &IndustryData,
    f: &Fundamentals,
    ratios: &ValuationRatios,
    profitability: &ProfitabilityMetrics,
) -> MacroMetrics {
    let yield_curve_spread = safe_sub(m.ten_year_yield, m.three_month_yield);
    let real_rate = safe_sub(m.ten_year_yield, m.expected_inflation);

    // Fisher identity: (1 + nominal) / (1 + expected inflation) - 1
    let real_rate_fisher = match (m.ten_year_yield, m.expected_inflation) {
        (Some(nominal), Some(inflation)) if inflation > -1.0 => {
            Some((1.0 + nominal) / (1.0 + inflation) - 1.0)
        }
        _ => None,
    };

    MacroMetrics {
        yield_curve_spread,
        yield_curve_inverted: yield_curve_spread.map(|s| s < 0.0),
        real_rate,
        real_rate_fisher,
        herfindahl_index: herfindahl_index(&industry.peer_revenues),
        cr4: concentration_ratio(&industry.peer_revenues, 4),
        cr8: concentration_ratio(&industry.peer_revenues, 8),
        market_share: market_share(f.revenue, &industry.peer_revenues),
        relative_pe: safe_div(ratios.pe_ratio, positive(industry.industry_avg_pe)),
        relative_pb: safe_div(ratios.pb_ratio, positive(industry.industry_avg_pb)),
        relative_roe: safe_div(
            profitability.return_on_equity,
            positive(industry.industry_avg_roe),
        ),
    }
}

fn valid_revenues(revenues: &[f64]) -> Option<(Vec<f64>, f64)> {
    let kept: Vec<f64> = revenues.iter().copied().filter(|r| *r > 0.0).collect();
    let total: f64 = kept.iter().sum();
    if kept.is_empty() || total <= 0.0 {
        return None;
    }
    Some((kept, total))
}

/// Herfindahl-Hirschman Index: `10000 * sum(share^2)` over all competitor
/// revenue shares. Ranges from near 0 (fragmented) to 10000 (monopoly).
pub fn herfindahl_index(revenues: &[f64]) -> Option<f64> {
    let (kept, total) = valid_revenues(revenues)?;
    let sum_squared_shares: f64 = kept.iter().map(|r| (r / total).powi(2)).sum();
    Some(10_000.0 * sum_squared_shares)
}

/// CR-n: cumulative revenue share of the top `n` competitors, in [0, 1].
pub fn concentration_ratio(revenues: &[f64], n: usize) -> Option<f64> {
    let (mut kept, total) = valid_revenues(revenues)?;
    kept.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let top: f64 = kept.iter().take(n).sum();
    Some(top / total)
}

/// Subject company's share of combined revenue: own revenue over own plus
/// all peers. Absent without a usable peer set, same as the concentration
/// indices; no peers is missing data, not a monopoly.
pub fn market_share(own_revenue: Option<f64>, peer_revenues: &[f64]) -> Option<f64> {
    let own = positive(own_revenue)?;
    let (_, peers) = valid_revenues(peer_revenues)?;
    Some(own / (own + peers))
}

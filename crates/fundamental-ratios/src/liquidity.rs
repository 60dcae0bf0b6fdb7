use metrics_core::kernel::{positive, safe_div, safe_sub};
use metrics_core::{Fundamentals, LiquidityMetrics};

/// Short-term solvency ratios.
pub fn liquidity_metrics(f: &Fundamentals) -> LiquidityMetrics {
    let cl = positive(f.current_liabilities);

    let current_ratio = safe_div(f.current_assets, cl).or(f.current_ratio);
    let quick_ratio = safe_div(safe_sub(f.current_assets, f.inventory), cl);
    let cash_ratio = safe_div(f.cash_and_equivalents, cl);
    let working_capital = safe_sub(f.current_assets, f.current_liabilities);

    LiquidityMetrics {
        current_ratio,
        quick_ratio,
        cash_ratio,
        working_capital,
        working_capital_to_assets: safe_div(working_capital, positive(f.total_assets)),
        operating_cash_flow_ratio: safe_div(f.operating_cash_flow, cl),
    }
}

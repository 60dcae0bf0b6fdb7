use metrics_core::kernel::{positive, safe_add, safe_div, safe_sub};
use metrics_core::{Fundamentals, ProfitabilityMetrics};

use crate::shared::Derived;

/// Margin and return ratios, as fractions (0.25 = 25%).
///
/// Margins and ROE/ROA fall back to the provider's reported figure when the
/// raw components are missing; a successful derivation always wins.
pub fn profitability_metrics(f: &Fundamentals, d: &Derived) -> ProfitabilityMetrics {
    let revenue = positive(f.revenue);

    let invested_capital = safe_add(d.total_debt, f.total_equity);
    let capital_employed = safe_sub(f.total_assets, f.current_liabilities);

    ProfitabilityMetrics {
        gross_margin: safe_div(f.gross_profit, revenue).or(f.gross_margin),
        operating_margin: safe_div(f.operating_income, revenue).or(f.operating_margin),
        net_margin: safe_div(f.net_income, revenue).or(f.net_margin),
        ebitda_margin: safe_div(d.ebitda, revenue),
        fcf_margin: safe_div(d.free_cash_flow, revenue),
        return_on_equity: safe_div(f.net_income, positive(f.total_equity))
            .or(f.return_on_equity),
        return_on_assets: safe_div(f.net_income, positive(f.total_assets))
            .or(f.return_on_assets),
        return_on_invested_capital: safe_div(d.noplat, positive(invested_capital)),
        return_on_capital_employed: safe_div(d.ebit, positive(capital_employed)),
    }
}

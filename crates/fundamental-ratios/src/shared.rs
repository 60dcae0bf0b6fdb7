//! Intermediates shared by several categories, derived exactly once per
//! calculation and threaded into every consumer. This keeps e.g. the
//! enterprise value seen by the valuation multiples identical to the one the
//! DCF model uses.

use metrics_core::kernel::{positive, safe_add, safe_mul, safe_sub};
use metrics_core::{Fundamentals, ResolvedConfig};

#[derive(Debug, Clone, Copy, Default)]
pub struct Derived {
    /// Reported EBITDA, else EBIT plus depreciation and amortization.
    pub ebitda: Option<f64>,
    /// EBIT, falling back to operating income.
    pub ebit: Option<f64>,
    /// Market cap, else price times shares outstanding.
    pub equity_value: Option<f64>,
    /// Reported total debt, else short-term plus long-term debt. Every
    /// debt-consuming category sees this same figure.
    pub total_debt: Option<f64>,
    /// Equity value plus total debt minus cash.
    pub enterprise_value: Option<f64>,
    /// `EBIT * (1 - tax_rate)` with the resolved tax rate.
    pub noplat: Option<f64>,
    /// Operating cash flow minus capex, else the reported figure.
    pub free_cash_flow: Option<f64>,
    pub fcf_per_share: Option<f64>,
}

pub fn derive_shared(f: &Fundamentals, config: &ResolvedConfig) -> Derived {
    let ebit = f.ebit.or(f.operating_income);
    let ebitda = f
        .ebitda
        .or(safe_add(ebit, f.depreciation_amortization));

    let equity_value = f
        .market_cap
        .or(safe_mul(f.price, positive(f.shares_outstanding)));
    let total_debt = f
        .total_debt
        .or(safe_add(f.short_term_debt, f.long_term_debt));
    let enterprise_value = safe_sub(
        safe_add(equity_value, total_debt),
        f.cash_and_equivalents,
    );

    let noplat = safe_mul(ebit, Some(1.0 - config.tax_rate));

    let free_cash_flow = safe_sub(f.operating_cash_flow, f.capital_expenditures)
        .or(f.free_cash_flow);
    let fcf_per_share = metrics_core::kernel::safe_div(
        free_cash_flow,
        positive(f.shares_outstanding),
    );

    Derived {
        ebitda,
        ebit,
        equity_value,
        total_debt,
        enterprise_value,
        noplat,
        free_cash_flow,
        fcf_per_share,
    }
}

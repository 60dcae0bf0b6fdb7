//! Cost of capital and discounted-cash-flow valuation.
//!
//! The headline `intrinsic_value_per_share` is a single-stage Gordon-growth
//! figure (terminal value over shares outstanding), a deliberate
//! simplification rather than a full multi-year projection. The five-year
//! explicit-projection variant is exposed separately as
//! `projected_value_per_share` and the two are never blended.

use fundamental_ratios::Derived;
use metrics_core::kernel::{positive, safe_div};
use metrics_core::{Fundamentals, GrowthMetrics, ResolvedConfig, ValuationMetrics};

/// CAPM: `risk_free + beta * market_risk_premium`.
pub fn cost_of_equity(
    risk_free_rate: Option<f64>,
    beta: Option<f64>,
    market_risk_premium: f64,
) -> Option<f64> {
    Some(risk_free_rate? + beta? * market_risk_premium)
}

/// Effective interest rate: interest expense over total debt (debt > 0).
pub fn cost_of_debt(interest_expense: Option<f64>, total_debt: Option<f64>) -> Option<f64> {
    safe_div(interest_expense, positive(total_debt))
}

/// Market-value-weighted blend of equity and after-tax debt costs.
///
/// A debt-free (or equity-only) structure degrades gracefully: the missing
/// leg simply carries zero weight. Absent when the combined capital base is
/// zero or the cost for a non-zero leg is unknown.
pub fn wacc(
    cost_of_equity: Option<f64>,
    cost_of_debt: Option<f64>,
    equity_value: Option<f64>,
    debt_value: Option<f64>,
    tax_rate: f64,
) -> Option<f64> {
    let equity = equity_value.unwrap_or(0.0).max(0.0);
    let debt = debt_value.unwrap_or(0.0).max(0.0);
    let total = equity + debt;
    if total <= 0.0 {
        return None;
    }

    let mut rate = 0.0;
    if equity > 0.0 {
        rate += equity / total * cost_of_equity?;
    }
    if debt > 0.0 {
        rate += debt / total * cost_of_debt? * (1.0 - tax_rate);
    }
    Some(rate)
}

/// Gordon-growth terminal value `FCF * (1 + g) / (WACC - g)`.
///
/// Absent, not infinite, whenever `WACC <= g`. The model has no answer
/// there and must say so rather than explode.
pub fn terminal_value(
    free_cash_flow: Option<f64>,
    wacc: Option<f64>,
    terminal_growth: f64,
) -> Option<f64> {
    let fcf = free_cash_flow?;
    let wacc = wacc?;
    if wacc <= terminal_growth {
        return None;
    }
    Some(fcf * (1.0 + terminal_growth) / (wacc - terminal_growth))
}

/// Reverse DCF: the growth rate the current price implies under the Gordon
/// model, `g = (WACC * P - FCF/sh) / (P + FCF/sh)`.
pub fn implied_growth_rate(
    price: Option<f64>,
    fcf_per_share: Option<f64>,
    wacc: Option<f64>,
) -> Option<f64> {
    let price = positive(price)?;
    let fcf = fcf_per_share?;
    let wacc = wacc?;
    let denominator = price + fcf;
    if denominator == 0.0 {
        return None;
    }
    let g = (wacc * price - fcf) / denominator;
    if g.is_finite() {
        Some(g)
    } else {
        None
    }
}

/// Five-year explicit projection: discounted yearly FCF plus the discounted
/// Gordon terminal value. The richer alternative to the single-stage figure.
pub fn projected_value_per_share(
    fcf_per_share: Option<f64>,
    growth_rate: f64,
    discount_rate: f64,
    terminal_growth: f64,
    years: u32,
) -> Option<f64> {
    let fcf = positive(fcf_per_share)?;
    if discount_rate <= terminal_growth || years == 0 {
        return None;
    }

    let explicit: f64 = (1..=years as i32)
        .map(|year| fcf * (1.0 + growth_rate).powi(year) / (1.0 + discount_rate).powi(year))
        .sum();
    let terminal = fcf * (1.0 + growth_rate).powi(years as i32) * (1.0 + terminal_growth)
        / (discount_rate - terminal_growth);
    let terminal_pv = terminal / (1.0 + discount_rate).powi(years as i32);

    let value = explicit + terminal_pv;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Full valuation record for one snapshot.
pub fn valuation_metrics(
    f: &Fundamentals,
    d: &Derived,
    growth: &GrowthMetrics,
    config: &ResolvedConfig,
) -> ValuationMetrics {
    let coe = config.cost_of_equity_override.or(cost_of_equity(
        config.risk_free_rate,
        f.beta,
        config.market_risk_premium,
    ));
    let cod = cost_of_debt(f.interest_expense, d.total_debt);
    let wacc_value = config.wacc_override.or(wacc(
        coe,
        cod,
        d.equity_value,
        d.total_debt,
        config.tax_rate,
    ));

    let terminal = terminal_value(d.free_cash_flow, wacc_value, config.terminal_growth_rate);
    let intrinsic = safe_div(terminal, positive(f.shares_outstanding));
    let upside = match (intrinsic, positive(f.price)) {
        (Some(value), Some(price)) => Some(value / price - 1.0),
        _ => None,
    };

    // Near-term growth for the explicit projection: observed revenue growth
    // clamped to a sane band, else a conservative 3%
    let projection_growth = growth
        .revenue_growth_yoy
        .map(|g| g.clamp(-0.05, 0.25))
        .unwrap_or(0.03);
    let discount_rate = wacc_value
        .or(coe)
        .map(|r| r.max(0.08));
    let projected = discount_rate.and_then(|rate| {
        projected_value_per_share(
            d.fcf_per_share,
            projection_growth,
            rate,
            config.terminal_growth_rate,
            5,
        )
    });

    ValuationMetrics {
        cost_of_equity: coe,
        cost_of_debt: cod,
        wacc: wacc_value,
        terminal_value: terminal,
        intrinsic_value_per_share: intrinsic,
        upside,
        implied_growth_rate: implied_growth_rate(f.price, d.fcf_per_share, wacc_value),
        projected_value_per_share: projected,
    }
}

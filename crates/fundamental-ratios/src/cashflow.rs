use metrics_core::kernel::{positive, safe_div};
use metrics_core::{CashFlowMetrics, Fundamentals};

use crate::shared::Derived;

/// Cash generation and distribution ratios.
pub fn cash_flow_metrics(f: &Fundamentals, d: &Derived) -> CashFlowMetrics {
    CashFlowMetrics {
        free_cash_flow: d.free_cash_flow,
        fcf_per_share: d.fcf_per_share,
        fcf_yield: safe_div(d.free_cash_flow, positive(d.equity_value)),
        ocf_to_net_income: safe_div(f.operating_cash_flow, positive(f.net_income)),
        capex_to_revenue: safe_div(f.capital_expenditures, positive(f.revenue)),
        capex_to_operating_cash_flow: safe_div(
            f.capital_expenditures,
            positive(f.operating_cash_flow),
        ),
        payout_ratio: payout_ratio(f),
        dividend_coverage: safe_div(d.free_cash_flow, positive(f.dividends_paid)),
    }
}

/// Dividend payout ratio with an ordering that matters:
/// - zero dividends is a real answer (0), whatever the earnings sign;
/// - non-zero dividends against non-positive earnings is meaningless (None).
fn payout_ratio(f: &Fundamentals) -> Option<f64> {
    match f.dividends_paid {
        Some(d) if d == 0.0 => Some(0.0),
        dividends => safe_div(dividends, positive(f.net_income)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::derive_shared;
    use metrics_core::{CalculatorConfig, RawSnapshot};

    fn derived(f: &Fundamentals) -> Derived {
        let config = CalculatorConfig::default().resolve(&RawSnapshot::default());
        derive_shared(f, &config)
    }

    #[test]
    fn zero_dividends_mean_zero_payout_even_when_unprofitable() {
        let f = Fundamentals {
            dividends_paid: Some(0.0),
            net_income: Some(-500.0),
            ..Default::default()
        };
        assert_eq!(cash_flow_metrics(&f, &derived(&f)).payout_ratio, Some(0.0));
    }

    #[test]
    fn payout_absent_for_non_positive_earnings_with_dividends() {
        let f = Fundamentals {
            dividends_paid: Some(40.0),
            net_income: Some(-100.0),
            ..Default::default()
        };
        assert_eq!(cash_flow_metrics(&f, &derived(&f)).payout_ratio, None);

        let f = Fundamentals {
            dividends_paid: Some(40.0),
            net_income: Some(0.0),
            ..Default::default()
        };
        assert_eq!(cash_flow_metrics(&f, &derived(&f)).payout_ratio, None);
    }

    #[test]
    fn payout_and_coverage_for_profitable_payer() {
        let f = Fundamentals {
            dividends_paid: Some(40.0),
            net_income: Some(160.0),
            operating_cash_flow: Some(200.0),
            capital_expenditures: Some(80.0),
            revenue: Some(1000.0),
            ..Default::default()
        };
        let m = cash_flow_metrics(&f, &derived(&f));
        assert_eq!(m.payout_ratio, Some(0.25));
        assert_eq!(m.free_cash_flow, Some(120.0));
        assert_eq!(m.dividend_coverage, Some(3.0));
        assert_eq!(m.capex_to_revenue, Some(0.08));
        assert_eq!(m.capex_to_operating_cash_flow, Some(0.4));
        assert_eq!(m.ocf_to_net_income, Some(1.25));
    }

    #[test]
    fn fcf_yield_uses_equity_value() {
        let f = Fundamentals {
            operating_cash_flow: Some(150.0),
            capital_expenditures: Some(50.0),
            market_cap: Some(2000.0),
            ..Default::default()
        };
        assert_eq!(cash_flow_metrics(&f, &derived(&f)).fcf_yield, Some(0.05));
    }
}

use metrics_core::kernel::{positive, safe_add, safe_div, safe_sub};
use metrics_core::{Fundamentals, LeverageMetrics};

use crate::shared::Derived;

/// Capital-structure and solvency ratios.
///
/// `debt_to_equity` is 0, not absent, for a debt-free company with positive
/// equity; EBITDA-based ratios are absent unless EBITDA is positive.
pub fn leverage_metrics(f: &Fundamentals, d: &Derived) -> LeverageMetrics {
    let total_debt = d.total_debt;
    let ebitda = positive(d.ebitda);

    let net_debt = safe_sub(total_debt, f.cash_and_equivalents);
    let interest_coverage = safe_div(d.ebit, positive(f.interest_expense));

    LeverageMetrics {
        debt_to_equity: safe_div(total_debt, positive(f.total_equity)),
        debt_to_assets: safe_div(total_debt, positive(f.total_assets)),
        debt_to_ebitda: safe_div(total_debt, ebitda),
        net_debt,
        net_debt_to_ebitda: safe_div(net_debt, ebitda),
        equity_multiplier: safe_div(f.total_assets, positive(f.total_equity)),
        interest_coverage,
        long_term_debt_ratio: safe_div(
            f.long_term_debt,
            positive(safe_add(f.long_term_debt, f.total_equity)),
        ),
        altman_z_score: altman_z(f, d),
        credit_rating: coverage_rating(interest_coverage),
    }
}

/// Altman Z-score for public manufacturers; absent unless every term can be
/// formed.
fn altman_z(f: &Fundamentals, d: &Derived) -> Option<f64> {
    let assets = positive(f.total_assets);
    let working_capital = safe_sub(f.current_assets, f.current_liabilities);

    let a = safe_div(working_capital, assets)?;
    let b = safe_div(f.retained_earnings, assets)?;
    let c = safe_div(d.ebit, assets)?;
    let dd = safe_div(d.equity_value, positive(f.total_liabilities))?;
    let e = safe_div(f.revenue, assets)?;
    Some(1.2 * a + 1.4 * b + 3.3 * c + 0.6 * dd + 1.0 * e)
}

/// Coarse coverage-based label. Not an agency rating; just a readable bucket
/// for how comfortably EBIT covers interest.
fn coverage_rating(interest_coverage: Option<f64>) -> Option<String> {
    let coverage = interest_coverage?;
    let label = match coverage {
        c if c >= 12.0 => "AAA",
        c if c >= 8.0 => "AA",
        c if c >= 5.0 => "A",
        c if c >= 3.0 => "BBB",
        c if c >= 2.0 => "BB",
        c if c >= 1.0 => "B",
        _ => "CCC",
    };
    Some(label.to_string())
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
    fn debt_free_company_scores_zero_not_absent() {
        let f = Fundamentals {
            total_debt: Some(0.0),
            total_equity: Some(1000.0),
            ebitda: Some(200.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.debt_to_equity, Some(0.0));
        assert_eq!(m.debt_to_ebitda, Some(0.0));
    }

    #[test]
    fn ebitda_ratios_absent_when_ebitda_non_positive() {
        let f = Fundamentals {
            total_debt: Some(100.0),
            ebitda: Some(-50.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.debt_to_ebitda, None);
        assert_eq!(m.net_debt_to_ebitda, None);
    }

    #[test]
    fn total_debt_reconstructed_from_tenors() {
        let f = Fundamentals {
            short_term_debt: Some(40.0),
            long_term_debt: Some(160.0),
            total_equity: Some(400.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.debt_to_equity, Some(0.5));
    }

    #[test]
    fn negative_equity_degrades_equity_ratios() {
        let f = Fundamentals {
            total_debt: Some(100.0),
            total_equity: Some(-200.0),
            total_assets: Some(500.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.debt_to_equity, None);
        assert_eq!(m.equity_multiplier, None);
        assert_eq!(m.debt_to_assets, Some(0.2));
    }

    #[test]
    fn coverage_rating_buckets() {
        let f = Fundamentals {
            ebit: Some(120.0),
            interest_expense: Some(10.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.interest_coverage, Some(12.0));
        assert_eq!(m.credit_rating.as_deref(), Some("AAA"));

        let f = Fundamentals {
            ebit: Some(15.0),
            interest_expense: Some(10.0),
            ..Default::default()
        };
        let m = leverage_metrics(&f, &derived(&f));
        assert_eq!(m.credit_rating.as_deref(), Some("B"));

        let f = Fundamentals::default();
        assert_eq!(leverage_metrics(&f, &derived(&f)).credit_rating, None);
    }

    #[test]
    fn altman_z_needs_every_term() {
        let f = Fundamentals {
            current_assets: Some(300.0),
            current_liabilities: Some(200.0),
            retained_earnings: Some(250.0),
            ebit: Some(120.0),
            market_cap: Some(900.0),
            total_liabilities: Some(600.0),
            revenue: Some(1000.0),
            total_assets: Some(1000.0),
            ..Default::default()
        };
        let z = leverage_metrics(&f, &derived(&f)).altman_z_score.unwrap();
        let expected = 1.2 * 0.1 + 1.4 * 0.25 + 3.3 * 0.12 + 0.6 * 1.5 + 1.0;
        assert!((z - expected).abs() < 1e-9);

        let mut partial = f.clone();
        partial.retained_earnings = None;
        assert_eq!(leverage_metrics(&partial, &derived(&partial)).altman_z_score, None);
    }
}

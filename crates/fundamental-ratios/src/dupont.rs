use metrics_core::kernel::{positive, safe_div, safe_mul};
use metrics_core::{DupontMetrics, Fundamentals};

/// DuPont decomposition of return on equity.
///
/// The product of the three factors and the directly derived ROE are both
/// exposed; whenever all factors are present the two must agree within
/// floating error. Five-step burden factors are included when the income
/// statement supports them.
pub fn dupont_metrics(f: &Fundamentals) -> DupontMetrics {
    let net_margin = safe_div(f.net_income, positive(f.revenue));
    let asset_turnover = safe_div(f.revenue, positive(f.total_assets));
    let equity_multiplier = safe_div(f.total_assets, positive(f.total_equity));

    let roe = safe_mul(safe_mul(net_margin, asset_turnover), equity_multiplier);
    let roe_direct = safe_div(f.net_income, positive(f.total_equity));

    let ebit = f.ebit.or(f.operating_income);

    DupontMetrics {
        net_margin,
        asset_turnover,
        equity_multiplier,
        roe,
        roe_direct,
        tax_burden: safe_div(f.net_income, positive(f.pretax_income)),
        interest_burden: safe_div(f.pretax_income, positive(ebit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fundamentals() -> Fundamentals {
        Fundamentals {
            revenue: Some(2000.0),
            net_income: Some(240.0),
            pretax_income: Some(300.0),
            ebit: Some(330.0),
            total_assets: Some(2500.0),
            total_equity: Some(800.0),
            ..Default::default()
        }
    }

    #[test]
    fn identity_holds_when_all_factors_present() {
        let m = dupont_metrics(&full_fundamentals());
        let product = m.net_margin.unwrap() * m.asset_turnover.unwrap() * m.equity_multiplier.unwrap();
        let direct = m.roe_direct.unwrap();
        assert!(((product - direct) / direct).abs() < 1e-9);
        assert!((m.roe.unwrap() - direct).abs() < 1e-9);
    }

    #[test]
    fn burden_factors() {
        let m = dupont_metrics(&full_fundamentals());
        assert_eq!(m.tax_burden, Some(0.8));
        assert!((m.interest_burden.unwrap() - 300.0 / 330.0).abs() < 1e-12);
    }

    #[test]
    fn missing_factor_degrades_product_but_not_direct_roe() {
        let mut f = full_fundamentals();
        f.total_assets = None;
        let m = dupont_metrics(&f);
        assert_eq!(m.asset_turnover, None);
        assert_eq!(m.roe, None);
        assert_eq!(m.roe_direct, Some(0.3));
    }
}

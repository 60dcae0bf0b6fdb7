use metrics_core::kernel::{positive, safe_div, safe_sub};
use metrics_core::{EfficiencyMetrics, Fundamentals};

/// Asset-utilization and working-capital cycle ratios.
///
/// Inventory-day ratios are absent for zero-inventory (service) entities
/// rather than reading as infinitely fast turnover.
pub fn efficiency_metrics(f: &Fundamentals) -> EfficiencyMetrics {
    let revenue = positive(f.revenue);
    let cogs = f
        .cost_of_revenue
        .or(safe_sub(f.revenue, f.gross_profit));

    let inventory_turnover = safe_div(cogs, positive(f.inventory));
    let receivables_turnover = safe_div(revenue, positive(f.receivables));
    let payables_turnover = safe_div(cogs, positive(f.accounts_payable));

    let days_inventory_outstanding = safe_div(Some(365.0), positive(inventory_turnover));
    let days_sales_outstanding = safe_div(Some(365.0), positive(receivables_turnover));
    let days_payables_outstanding = safe_div(Some(365.0), positive(payables_turnover));

    // CCC = DIO + DSO - DPO; absent unless all three legs exist
    let cash_conversion_cycle = match (
        days_inventory_outstanding,
        days_sales_outstanding,
        days_payables_outstanding,
    ) {
        (Some(dio), Some(dso), Some(dpo)) => Some(dio + dso - dpo),
        _ => None,
    };

    let working_capital = safe_sub(f.current_assets, f.current_liabilities);

    EfficiencyMetrics {
        asset_turnover: safe_div(revenue, positive(f.total_assets)),
        fixed_asset_turnover: safe_div(revenue, positive(f.fixed_assets)),
        working_capital_turnover: safe_div(revenue, positive(working_capital)),
        inventory_turnover,
        days_inventory_outstanding,
        receivables_turnover,
        days_sales_outstanding,
        payables_turnover,
        days_payables_outstanding,
        cash_conversion_cycle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turnover_and_day_ratios() {
        let f = Fundamentals {
            revenue: Some(730.0),
            cost_of_revenue: Some(365.0),
            inventory: Some(73.0),
            receivables: Some(73.0),
            accounts_payable: Some(36.5),
            total_assets: Some(1460.0),
            ..Default::default()
        };
        let m = efficiency_metrics(&f);
        assert_eq!(m.asset_turnover, Some(0.5));
        assert_eq!(m.inventory_turnover, Some(5.0));
        assert_eq!(m.days_inventory_outstanding, Some(73.0));
        assert_eq!(m.receivables_turnover, Some(10.0));
        assert_eq!(m.days_sales_outstanding, Some(36.5));
        assert_eq!(m.payables_turnover, Some(10.0));
        assert_eq!(m.days_payables_outstanding, Some(36.5));
        // 73 + 36.5 - 36.5
        assert_eq!(m.cash_conversion_cycle, Some(73.0));
    }

    #[test]
    fn zero_inventory_entity_has_absent_inventory_ratios() {
        let f = Fundamentals {
            revenue: Some(500.0),
            cost_of_revenue: Some(300.0),
            inventory: Some(0.0),
            receivables: Some(50.0),
            accounts_payable: Some(30.0),
            ..Default::default()
        };
        let m = efficiency_metrics(&f);
        assert_eq!(m.inventory_turnover, None);
        assert_eq!(m.days_inventory_outstanding, None);
        assert_eq!(m.cash_conversion_cycle, None);
        assert!(m.receivables_turnover.is_some());
    }

    #[test]
    fn cogs_reconstructed_from_gross_profit() {
        let f = Fundamentals {
            revenue: Some(1000.0),
            gross_profit: Some(600.0),
            inventory: Some(100.0),
            ..Default::default()
        };
        assert_eq!(efficiency_metrics(&f).inventory_turnover, Some(4.0));
    }
}

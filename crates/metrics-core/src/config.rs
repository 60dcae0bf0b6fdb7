use serde::{Deserialize, Serialize};

use crate::kernel::{positive, safe_div};
use crate::types::RawSnapshot;

/// Equity market risk premium applied when none is configured.
pub const DEFAULT_MARKET_RISK_PREMIUM: f64 = 0.05;
/// Gordon-growth terminal rate applied when none is configured.
pub const DEFAULT_TERMINAL_GROWTH_RATE: f64 = 0.025;
/// US statutory corporate tax rate, the last-resort tax fallback.
pub const DEFAULT_TAX_RATE: f64 = 0.21;

/// Named optional calculator parameters.
///
/// Absence of a value is never an error: each field has a documented
/// default or derivation rule applied by [`CalculatorConfig::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Equity market risk premium. Default 0.05.
    pub market_risk_premium: Option<f64>,
    /// Terminal growth rate for Gordon-growth valuation. Default 0.025.
    pub terminal_growth_rate: Option<f64>,
    /// Effective tax rate. Default: derived from the snapshot's tax expense
    /// over pretax income, else 0.21.
    pub tax_rate: Option<f64>,
    /// Annual risk-free rate. Default: the snapshot's 10-year yield, which
    /// may itself be absent.
    pub risk_free_rate: Option<f64>,
    /// Bypass the WACC derivation entirely.
    pub wacc_override: Option<f64>,
    /// Bypass the CAPM cost-of-equity derivation.
    pub cost_of_equity_override: Option<f64>,
}

/// Configuration after defaults and snapshot-derived fallbacks are applied.
///
/// Resolved exactly once per calculation so every category sees the same
/// tax rate, risk-free rate, and overrides.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig {
    pub market_risk_premium: f64,
    pub terminal_growth_rate: f64,
    pub tax_rate: f64,
    pub risk_free_rate: Option<f64>,
    pub wacc_override: Option<f64>,
    pub cost_of_equity_override: Option<f64>,
}

impl CalculatorConfig {
    pub fn resolve(&self, snapshot: &RawSnapshot) -> ResolvedConfig {
        let f = &snapshot.fundamentals;
        let effective_tax = safe_div(f.income_tax_expense, positive(f.pretax_income))
            .filter(|t| (0.0..=1.0).contains(t));

        ResolvedConfig {
            market_risk_premium: self
                .market_risk_premium
                .unwrap_or(DEFAULT_MARKET_RISK_PREMIUM),
            terminal_growth_rate: self
                .terminal_growth_rate
                .unwrap_or(DEFAULT_TERMINAL_GROWTH_RATE),
            tax_rate: self
                .tax_rate
                .or(effective_tax)
                .unwrap_or(DEFAULT_TAX_RATE),
            risk_free_rate: self
                .risk_free_rate
                .or(snapshot.macro_indicators.ten_year_yield),
            wacc_override: self.wacc_override,
            cost_of_equity_override: self.cost_of_equity_override,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawSnapshot;

    #[test]
    fn defaults_apply_on_empty_config_and_snapshot() {
        let resolved = CalculatorConfig::default().resolve(&RawSnapshot::default());
        assert_eq!(resolved.market_risk_premium, DEFAULT_MARKET_RISK_PREMIUM);
        assert_eq!(resolved.terminal_growth_rate, DEFAULT_TERMINAL_GROWTH_RATE);
        assert_eq!(resolved.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(resolved.risk_free_rate, None);
    }

    #[test]
    fn tax_rate_derived_from_snapshot_when_unset() {
        let mut snapshot = RawSnapshot::default();
        snapshot.fundamentals.income_tax_expense = Some(24.0);
        snapshot.fundamentals.pretax_income = Some(100.0);
        let resolved = CalculatorConfig::default().resolve(&snapshot);
        assert!((resolved.tax_rate - 0.24).abs() < 1e-12);

        // Explicit config wins over the derivation
        let config = CalculatorConfig {
            tax_rate: Some(0.30),
            ..Default::default()
        };
        assert!((config.resolve(&snapshot).tax_rate - 0.30).abs() < 1e-12);
    }

    #[test]
    fn nonsense_effective_tax_falls_back_to_statutory() {
        let mut snapshot = RawSnapshot::default();
        // Negative pretax income makes the derived rate meaningless
        snapshot.fundamentals.income_tax_expense = Some(10.0);
        snapshot.fundamentals.pretax_income = Some(-50.0);
        let resolved = CalculatorConfig::default().resolve(&snapshot);
        assert_eq!(resolved.tax_rate, DEFAULT_TAX_RATE);
    }

    #[test]
    fn risk_free_rate_sourced_from_macro_field() {
        let mut snapshot = RawSnapshot::default();
        snapshot.macro_indicators.ten_year_yield = Some(0.042);
        let resolved = CalculatorConfig::default().resolve(&snapshot);
        assert_eq!(resolved.risk_free_rate, Some(0.042));
    }
}

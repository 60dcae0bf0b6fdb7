//! Output records: flat mappings of metric name to nullable value.
//!
//! Every field is independently optional. A missing upstream input degrades
//! exactly the metrics that depend on it and none others, so records are
//! always fully constructed, never partially "failed".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiquidityMetrics {
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub cash_ratio: Option<f64>,
    pub working_capital: Option<f64>,
    pub working_capital_to_assets: Option<f64>,
    pub operating_cash_flow_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeverageMetrics {
    pub debt_to_equity: Option<f64>,
    pub debt_to_assets: Option<f64>,
    pub debt_to_ebitda: Option<f64>,
    pub net_debt: Option<f64>,
    pub net_debt_to_ebitda: Option<f64>,
    pub equity_multiplier: Option<f64>,
    pub interest_coverage: Option<f64>,
    pub long_term_debt_ratio: Option<f64>,
    pub altman_z_score: Option<f64>,
    /// Coarse synthetic label derived from interest coverage, not an agency
    /// rating.
    pub credit_rating: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    pub asset_turnover: Option<f64>,
    pub fixed_asset_turnover: Option<f64>,
    pub working_capital_turnover: Option<f64>,
    pub inventory_turnover: Option<f64>,
    pub days_inventory_outstanding: Option<f64>,
    pub receivables_turnover: Option<f64>,
    pub days_sales_outstanding: Option<f64>,
    pub payables_turnover: Option<f64>,
    pub days_payables_outstanding: Option<f64>,
    pub cash_conversion_cycle: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitabilityMetrics {
    pub gross_margin: Option<f64>,
    pub operating_margin: Option<f64>,
    pub net_margin: Option<f64>,
    pub ebitda_margin: Option<f64>,
    pub fcf_margin: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub return_on_invested_capital: Option<f64>,
    pub return_on_capital_employed: Option<f64>,
}

/// Both sides of the DuPont identity are exposed so
/// `roe = net_margin * asset_turnover * equity_multiplier` can be checked
/// against the independently derived figure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DupontMetrics {
    pub net_margin: Option<f64>,
    pub asset_turnover: Option<f64>,
    pub equity_multiplier: Option<f64>,
    /// Product of the three factors.
    pub roe: Option<f64>,
    /// Net income over equity, derived independently of the factors.
    pub roe_direct: Option<f64>,
    pub tax_burden: Option<f64>,
    pub interest_burden: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub revenue_growth_yoy: Option<f64>,
    pub net_income_growth_yoy: Option<f64>,
    pub eps_growth_yoy: Option<f64>,
    pub dividend_growth_yoy: Option<f64>,
    pub fcf_growth_yoy: Option<f64>,
    pub revenue_cagr_3y: Option<f64>,
    pub revenue_cagr_5y: Option<f64>,
    pub net_income_cagr_3y: Option<f64>,
    pub eps_cagr_5y: Option<f64>,
    pub sustainable_growth_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowMetrics {
    pub free_cash_flow: Option<f64>,
    pub fcf_per_share: Option<f64>,
    pub fcf_yield: Option<f64>,
    pub ocf_to_net_income: Option<f64>,
    pub capex_to_revenue: Option<f64>,
    pub capex_to_operating_cash_flow: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub dividend_coverage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationRatios {
    pub pe_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    pub ps_ratio: Option<f64>,
    pub pocf_ratio: Option<f64>,
    pub enterprise_value: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub ev_to_sales: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub earnings_yield: Option<f64>,
    pub dividend_yield: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
    pub rsi_14: Option<f64>,
    pub stochastic_k: Option<f64>,
    pub stochastic_d: Option<f64>,
    pub williams_r: Option<f64>,
    pub cci_20: Option<f64>,
    pub mfi_14: Option<f64>,
    pub golden_cross: Option<bool>,
    pub death_cross: Option<bool>,
    pub price_above_sma_200: Option<bool>,
    pub momentum_20d: Option<f64>,
    pub annualized_volatility: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub sortino_ratio: Option<f64>,
    pub var_95: Option<f64>,
    pub cvar_95: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroMetrics {
    pub yield_curve_spread: Option<f64>,
    pub yield_curve_inverted: Option<bool>,
    pub real_rate: Option<f64>,
    pub real_rate_fisher: Option<f64>,
    pub herfindahl_index: Option<f64>,
    pub cr4: Option<f64>,
    pub cr8: Option<f64>,
    pub market_share: Option<f64>,
    pub relative_pe: Option<f64>,
    pub relative_pb: Option<f64>,
    pub relative_roe: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationMetrics {
    pub cost_of_equity: Option<f64>,
    pub cost_of_debt: Option<f64>,
    pub wacc: Option<f64>,
    pub terminal_value: Option<f64>,
    /// Single-stage (terminal-value-only) figure; a deliberate
    /// simplification, see `valuation-model`.
    pub intrinsic_value_per_share: Option<f64>,
    pub upside: Option<f64>,
    pub implied_growth_rate: Option<f64>,
    /// Five-year explicit-projection alternative; never blended with the
    /// single-stage figure.
    pub projected_value_per_share: Option<f64>,
}

/// Normalized composite scores, each in [0, 100] or absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub profitability: Option<f64>,
    pub growth: Option<f64>,
    pub valuation: Option<f64>,
    pub risk: Option<f64>,
    pub financial_health: Option<f64>,
    pub total: Option<f64>,
}

/// Full derivation output for one snapshot. Created fresh per invocation,
/// never mutated after return, serializes directly to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub symbol: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub liquidity: LiquidityMetrics,
    pub leverage: LeverageMetrics,
    pub efficiency: EfficiencyMetrics,
    pub profitability: ProfitabilityMetrics,
    pub dupont: DupontMetrics,
    pub growth: GrowthMetrics,
    pub cash_flow: CashFlowMetrics,
    pub valuation_ratios: ValuationRatios,
    pub technical: TechnicalMetrics,
    pub macro_metrics: MacroMetrics,
    pub valuation: ValuationMetrics,
    pub scores: ScoreRecord,
}

impl AggregateResult {
    pub fn to_json(&self) -> Result<String, crate::MetricsError> {
        Ok(serde_json::to_string(self)?)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar. Price history is chronological: oldest bar first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Historical figure array ordered most-recent-first: index 0 is the latest
/// period, index N is N periods back.
///
/// This is the opposite ordering from the price history (`Vec<Bar>`, oldest
/// first). Keeping it a dedicated type means the two sequences cannot be
/// swapped at a module seam without the compiler noticing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFirst(pub Vec<f64>);

impl RecentFirst {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Most recent period (index 0).
    pub fn latest(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Value `n` periods before the latest one.
    pub fn periods_back(&self, n: usize) -> Option<f64> {
        self.0.get(n).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Point-in-time fundamental figures for one instrument.
///
/// Every field is independently optional; a missing field degrades exactly
/// the ratios that reference it. Monetary fields share one currency and the
/// provider's reporting period (TTM or latest fiscal year). `capital_expenditures`
/// is a positive outflow figure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    // Income statement
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub operating_income: Option<f64>,
    pub ebit: Option<f64>,
    pub ebitda: Option<f64>,
    pub depreciation_amortization: Option<f64>,
    pub interest_expense: Option<f64>,
    pub pretax_income: Option<f64>,
    pub income_tax_expense: Option<f64>,
    pub net_income: Option<f64>,
    pub eps: Option<f64>,

    // Balance sheet
    pub total_assets: Option<f64>,
    pub current_assets: Option<f64>,
    pub cash_and_equivalents: Option<f64>,
    pub receivables: Option<f64>,
    pub inventory: Option<f64>,
    pub fixed_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub accounts_payable: Option<f64>,
    pub short_term_debt: Option<f64>,
    pub long_term_debt: Option<f64>,
    pub total_debt: Option<f64>,
    pub total_equity: Option<f64>,
    pub retained_earnings: Option<f64>,

    // Cash flow statement
    pub operating_cash_flow: Option<f64>,
    pub capital_expenditures: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub dividends_paid: Option<f64>,

    // Market / per-share
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub book_value_per_share: Option<f64>,
    pub dividends_per_share: Option<f64>,
    pub beta: Option<f64>,

    // Provider-reported ratios, used only as fallbacks when the raw
    // components are missing. A successful derivation always wins.
    pub current_ratio: Option<f64>,
    pub gross_margin: Option<f64>,
    pub operating_margin: Option<f64>,
    pub net_margin: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
}

/// Per-figure history, most-recent-first (see [`RecentFirst`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalFigures {
    pub revenue: RecentFirst,
    pub net_income: RecentFirst,
    pub eps: RecentFirst,
    pub dividends_per_share: RecentFirst,
    pub free_cash_flow: RecentFirst,
}

/// Macro series, each independently nullable. Rates are annual fractions
/// (0.045 = 4.5%).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroIndicators {
    pub ten_year_yield: Option<f64>,
    pub three_month_yield: Option<f64>,
    pub fed_funds_rate: Option<f64>,
    pub cpi_inflation: Option<f64>,
    pub expected_inflation: Option<f64>,
    pub gdp_growth: Option<f64>,
    pub unemployment_rate: Option<f64>,
    pub financial_conditions_index: Option<f64>,
}

/// Industry and competitor context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryData {
    /// Revenues of all tracked competitors (same currency as the snapshot).
    pub peer_revenues: Vec<f64>,
    pub industry_avg_pe: Option<f64>,
    pub industry_avg_pb: Option<f64>,
    pub industry_avg_roe: Option<f64>,
    pub industry_avg_net_margin: Option<f64>,
}

/// One immutable point-in-time record per instrument, assembled by the
/// upstream fetch layer. The engine never mutates it and tolerates any
/// subset of fields being absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    pub symbol: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub fundamentals: Fundamentals,
    pub history: HistoricalFigures,
    /// Chronological (oldest first) daily price history.
    pub price_history: Vec<Bar>,
    pub macro_indicators: MacroIndicators,
    pub industry_data: IndustryData,
}

impl RawSnapshot {
    pub fn from_json(json: &str) -> Result<Self, crate::MetricsError> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Benchmark bands used to map raw ratios onto the common 0-100 scale.
//!
//! Bands are broad-market heuristics, not sector-adjusted. A value at or
//! beyond a band edge simply saturates at 0 or 100.

/// Rescaling band for one raw metric.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub min: f64,
    pub max: f64,
    /// When false, lower raw values score higher (ratios where cheap or
    /// conservative is good: P/E, debt, volatility...).
    pub higher_is_better: bool,
}

const fn good_high(min: f64, max: f64) -> Benchmark {
    Benchmark { min, max, higher_is_better: true }
}

const fn good_low(min: f64, max: f64) -> Benchmark {
    Benchmark { min, max, higher_is_better: false }
}

// Profitability (fractions)
pub const ROE: Benchmark = good_high(0.0, 0.30);
pub const ROA: Benchmark = good_high(0.0, 0.15);
pub const ROIC: Benchmark = good_high(0.0, 0.25);
pub const NET_MARGIN: Benchmark = good_high(0.0, 0.25);
pub const OPERATING_MARGIN: Benchmark = good_high(0.0, 0.30);

// Growth (fractions per year)
pub const REVENUE_GROWTH: Benchmark = good_high(-0.10, 0.30);
pub const EPS_GROWTH: Benchmark = good_high(-0.10, 0.35);
pub const REVENUE_CAGR: Benchmark = good_high(-0.05, 0.25);
pub const FCF_GROWTH: Benchmark = good_high(-0.15, 0.35);

// Valuation (multiples / fractions)
pub const PE_RATIO: Benchmark = good_low(5.0, 40.0);
pub const PB_RATIO: Benchmark = good_low(0.5, 8.0);
pub const EV_TO_EBITDA: Benchmark = good_low(4.0, 25.0);
pub const FCF_YIELD: Benchmark = good_high(0.0, 0.10);
pub const DCF_UPSIDE: Benchmark = good_high(-0.50, 0.50);

// Risk
pub const VOLATILITY: Benchmark = good_low(0.10, 0.60);
pub const MAX_DRAWDOWN: Benchmark = good_low(0.05, 0.60);
pub const BETA: Benchmark = good_low(0.5, 2.0);
pub const SHARPE: Benchmark = good_high(-1.0, 3.0);
pub const VAR_95: Benchmark = good_high(-0.06, 0.0);

// Financial health
pub const CURRENT_RATIO: Benchmark = good_high(0.5, 3.0);
pub const QUICK_RATIO: Benchmark = good_high(0.3, 2.0);
pub const DEBT_TO_EQUITY: Benchmark = good_low(0.0, 2.5);
pub const INTEREST_COVERAGE: Benchmark = good_high(0.0, 12.0);
pub const OCF_RATIO: Benchmark = good_high(0.0, 1.5);

//! Fundamental ratio categories: pure functions from one snapshot to flat
//! records of nullable ratios.
//!
//! Two policies recur throughout:
//! - fallback-to-reported-value: derive from raw components first; fall back
//!   to the provider's precomputed figure only when the derivation is absent.
//! - domain-validity guards: a ratio is `None`, not merely zero, whenever its
//!   denominator is non-positive in a way that makes it meaningless.

pub mod cashflow;
pub mod dupont;
pub mod efficiency;
pub mod growth;
pub mod leverage;
pub mod liquidity;
pub mod profitability;
pub mod shared;
pub mod valuation;

pub use cashflow::cash_flow_metrics;
pub use dupont::dupont_metrics;
pub use efficiency::efficiency_metrics;
pub use growth::growth_metrics;
pub use leverage::leverage_metrics;
pub use liquidity::liquidity_metrics;
pub use profitability::profitability_metrics;
pub use shared::{derive_shared, Derived};
pub use valuation::valuation_ratios;

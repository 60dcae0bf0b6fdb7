use metrics_core::kernel::{positive, safe_div};
use metrics_core::{Fundamentals, GrowthMetrics, ValuationRatios};

use crate::shared::Derived;

/// Market-multiple ratios. Earnings-based multiples are absent for
/// unprofitable companies rather than negative.
pub fn valuation_ratios(f: &Fundamentals, d: &Derived, growth: &GrowthMetrics) -> ValuationRatios {
    let price = positive(f.price);

    let book_value_per_share = f.book_value_per_share.or(safe_div(
        f.total_equity,
        positive(f.shares_outstanding),
    ));
    let revenue_per_share = safe_div(f.revenue, positive(f.shares_outstanding));
    let ocf_per_share = safe_div(f.operating_cash_flow, positive(f.shares_outstanding));

    let pe_ratio = safe_div(price, positive(f.eps)).or(f.pe_ratio);
    // PEG expects growth as a percentage figure
    let peg_ratio = safe_div(
        pe_ratio,
        positive(growth.eps_growth_yoy.or(growth.revenue_growth_yoy)).map(|g| g * 100.0),
    );

    ValuationRatios {
        pe_ratio,
        pb_ratio: safe_div(price, positive(book_value_per_share)),
        ps_ratio: safe_div(price, positive(revenue_per_share)),
        pocf_ratio: safe_div(price, positive(ocf_per_share)),
        enterprise_value: d.enterprise_value,
        ev_to_ebitda: safe_div(d.enterprise_value, positive(d.ebitda)),
        ev_to_sales: safe_div(d.enterprise_value, positive(f.revenue)),
        peg_ratio,
        earnings_yield: safe_div(f.eps, price),
        dividend_yield: safe_div(f.dividends_per_share, price).or(f.dividend_yield),
    }
}

//! Null-safe arithmetic primitives shared by every metric category.
//!
//! The whole engine represents "cannot compute" as `None`, never as NaN,
//! infinity, or a panic. Every function here upholds that: any absent
//! operand, degenerate denominator, or non-finite result collapses to
//! `None` and propagates through downstream formulas.

/// Keep a value only if it is present and strictly positive.
///
/// Common domain guard for denominators that are meaningless at or below
/// zero (equity, EBITDA, revenue, inventory, ...).
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn finite(value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// `numerator / denominator`, or `None` when either operand is absent, the
/// denominator is zero, or the result is not finite.
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => finite(n / d),
        _ => None,
    }
}

/// Product of two optional values; `None` if either is absent.
pub fn safe_mul(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => finite(a * b),
        _ => None,
    }
}

/// Sum of two optional values; `None` if either is absent.
pub fn safe_add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => finite(a + b),
        _ => None,
    }
}

/// Difference of two optional values; `None` if either is absent.
pub fn safe_sub(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => finite(a - b),
        _ => None,
    }
}

/// Fractional change `(current - previous) / |previous|`.
///
/// `None` when either value is absent or the previous value is zero.
pub fn pct_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(c), Some(p)) if p != 0.0 => finite((c - p) / p.abs()),
        _ => None,
    }
}

/// Compound annual growth rate `(end / start)^(1/years) - 1`.
///
/// `None` when the start value is not strictly positive, the end value is
/// absent, or `years <= 0`. A negative end value over an even root would be
/// complex; it degrades to `None` via the finiteness check.
pub fn cagr(end: Option<f64>, start: Option<f64>, years: f64) -> Option<f64> {
    let end = end?;
    let start = positive(start)?;
    if years <= 0.0 {
        return None;
    }
    finite((end / start).powf(1.0 / years) - 1.0)
}

/// Clamp `value` to `[min, max]`, then map linearly onto `[0, 100]`.
///
/// `None` when the value is absent or the interval is degenerate.
pub fn linear_rescale(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    let v = value?;
    if !(max > min) || !v.is_finite() {
        return None;
    }
    let clamped = v.clamp(min, max);
    finite((clamped - min) / (max - min) * 100.0)
}

/// Weighted average over `(value, weight)` pairs.
///
/// Pairs with an absent value are skipped and the remaining weights are
/// renormalized to sum to 1, so a missing component degrades only its own
/// contribution. `None` when no value is present or the surviving weights
/// sum to zero.
pub fn weighted_average(pairs: &[(Option<f64>, f64)]) -> Option<f64> {
    let mut weight_sum = 0.0;
    let mut value_sum = 0.0;
    for (value, weight) in pairs {
        if let Some(v) = value {
            weight_sum += weight;
            value_sum += v * weight;
        }
    }
    if weight_sum == 0.0 {
        return None;
    }
    finite(value_sum / weight_sum)
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    finite(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance; `None` for an empty slice.
pub fn variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    finite(data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64)
}

/// Population standard deviation; `None` for an empty slice.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

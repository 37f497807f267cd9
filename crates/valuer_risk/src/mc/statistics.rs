//! Summary statistics over simulated value distributions.
//!
//! Percentiles use linear interpolation between order statistics (the
//! same convention as NumPy's default), so results line up with the
//! reference figures analysts expect from that ecosystem.

/// Arithmetic mean. Returns 0.0 for an empty slice; callers guard.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation about a precomputed mean.
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Percentile of an ascending-sorted slice, `p` in percent.
///
/// Linear interpolation between the two nearest order statistics:
/// the rank is `p/100 × (n − 1)` and the value is interpolated between
/// `sorted[floor(rank)]` and `sorted[ceil(rank)]`. A degenerate
/// distribution (all values equal) returns that value for every `p`.
///
/// # Panics
/// Does not panic: an empty slice returns 0.0 (callers guard against
/// empty inputs before reaching here).
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        1 => sorted[0],
        _ => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            if lo == hi {
                sorted[lo]
            } else {
                let frac = rank - lo as f64;
                sorted[lo] + (sorted[hi] - sorted[lo]) * frac
            }
        }
    }
}

/// Value at risk at the given confidence level.
///
/// The loss relative to `base_value` at the `(1 − confidence)`
/// percentile of the simulated distribution, floored at zero: if even
/// the adverse tail sits above the base value there is no value at
/// risk, not a negative one.
pub fn value_at_risk(sorted: &[f64], base_value: f64, confidence: f64) -> f64 {
    // 100 − c×100, not (1 − c)×100: the former is exact for round
    // confidence levels (0.95 → 5.0), so the tail here interpolates at
    // the same rank as the matching reported percentile band.
    let tail = percentile_sorted(sorted, 100.0 - confidence * 100.0);
    (base_value - tail).max(0.0)
}

/// Fraction of values that are strictly positive.
pub fn probability_positive(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|&&v| v > 0.0).count() as f64 / values.len() as f64
}

// File: crates/plot-core/src/summary.rs
// Summary: Five-number summary with IQR whiskers clamped to the observed extremes.

use crate::error::ChartError;

/// Quartiles and whisker bounds for one category group.
///
/// Invariant: `lower_whisker <= q1 <= median <= q3 <= upper_whisker`.
/// Whiskers are clamped to the observed extremes, never extrapolated past
/// them, so `min <= lower_whisker` and `upper_whisker <= max`. There are no
/// separate outlier points; everything folds into the whisker clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
}

/// Reduce one group's observations to its five-number summary.
///
/// Sorts internally, so the result depends only on the multiset of values.
/// Fails with `InsufficientData` on empty input.
pub fn summarize(values: &[f64]) -> Result<FiveNumberSummary, ChartError> {
    if values.is_empty() {
        return Err(ChartError::InsufficientData);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_whisker = min.max(q1 - 1.5 * iqr);
    let upper_whisker = max.min(q3 + 1.5 * iqr);

    Ok(FiveNumberSummary { min, q1, median, q3, max, lower_whisker, upper_whisker })
}

/// Linear-interpolation quantile over ascending `sorted` at fraction `f`
/// (the R-7 estimator): rank = f * (n - 1), interpolate between the
/// bracketing order statistics.
fn quantile_sorted(sorted: &[f64], f: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&f));
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = f * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let lo = sorted[lower];
    let hi = sorted[upper];
    lo + (hi - lo) * (rank - lower as f64)
}

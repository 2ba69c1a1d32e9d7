/// MediaView Numeric Statistics
///
/// Box-plot summaries for a column of numbers: quartiles by linear
/// interpolation (the R-7 estimator), interquartile range, Tukey fences and
/// the arithmetic mean.
///
/// # Examples
///
/// ```
/// use mediaview::BoxStats;
///
/// let stats = BoxStats::compute((1..=10).map(f64::from)).unwrap();
///
/// assert_eq!(stats.q1, 3.25);
/// assert_eq!(stats.median, 5.5);
/// assert_eq!(stats.q3, 7.75);
/// assert_eq!(stats.lower, -3.5);
/// assert_eq!(stats.upper, 14.5);
/// ```

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Multiplier applied to the IQR for the whisker fences
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// Summary statistics for a box-and-whisker chart.
///
/// `lower` and `upper` are the Tukey fences. They only place the whiskers;
/// values outside them are still counted in `mean` and `count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
    pub mean: f64,
    pub count: usize,
}

impl BoxStats {
    /// Compute statistics over the given values. NaN entries are dropped;
    /// returns `None` when nothing is left.
    pub fn compute<I>(values: I) -> Option<BoxStats>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut clean: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if clean.is_empty() {
            return None;
        }

        // No NaN left, so the comparison is total
        clean.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&clean, 0.25)?;
        let median = quantile(&clean, 0.5)?;
        let q3 = quantile(&clean, 0.75)?;
        let iqr = q3 - q1;
        let mean = mean(&clean)?;

        Some(BoxStats {
            q1,
            median,
            q3,
            iqr,
            lower: q1 - TUKEY_FENCE_FACTOR * iqr,
            upper: q3 + TUKEY_FENCE_FACTOR * iqr,
            mean,
            count: clean.len(),
        })
    }

    /// Compute statistics over raw JSON values, ignoring anything that is
    /// not a number.
    pub fn from_json_values(values: &[JsonValue]) -> Option<BoxStats> {
        Self::compute(values.iter().filter_map(JsonValue::as_f64))
    }

    /// True if `value` lies outside the whisker fences
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Linear-interpolation quantile over an ascending slice.
///
/// Position is `(n - 1) * p`; the result interpolates between the two
/// neighbouring ranks, or returns the last rank when there is no upper
/// neighbour. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = (sorted.len() - 1) as f64 * p;
    let base = position.floor() as usize;
    let rest = position - base as f64;

    match sorted.get(base + 1) {
        Some(next) => Some(sorted[base] + rest * (next - sorted[base])),
        None => Some(sorted[base]),
    }
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

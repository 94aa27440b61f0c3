//! Small helpers for summarizing integer series, used by drivers to compare
//! final stakes across simulation sessions.

pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Arithmetic mean. Panics on an empty series.
pub fn mean(values: &[i64]) -> f64 {
    assert!(!values.is_empty(), "mean of an empty series");
    sum(values) as f64 / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Panics on a series with
/// fewer than two values.
pub fn std(values: &[i64]) -> f64 {
    assert!(values.len() > 1, "std of a series shorter than 2");
    let mean = mean(values);
    let sum_of_squares: f64 = values
        .iter()
        .map(|&value| {
            let diff = value as f64 - mean;
            diff * diff
        })
        .sum();
    (sum_of_squares / (values.len() - 1) as f64).sqrt()
}

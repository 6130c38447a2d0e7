//! Mean, median and population standard deviation over timing readings.

use crate::result::Aggregate;
use crate::statistics::units::to_ms;

/// Arithmetic mean.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "mean of empty sample set");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median with the even-length midpoint rule.
///
/// Sorts a copy ascending; for odd k returns element k/2, for even k the
/// average of elements k/2 - 1 and k/2. The caller's slice is not mutated.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "median of empty sample set");
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation: sqrt of the mean squared deviation.
///
/// The divisor is k, not k - 1. Zero for a single reading or when all
/// readings are equal.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn population_stddev(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "stddev of empty sample set");
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Summarize a SampleSet of elapsed-nanosecond readings in milliseconds.
///
/// All three statistics are computed from the same converted readings; the
/// caller's slice is left untouched.
///
/// # Panics
///
/// Panics if `readings_ns` is empty.
pub fn aggregate_ns(readings_ns: &[u64]) -> Aggregate {
    let ms: Vec<f64> = readings_ns.iter().map(|&ns| to_ms(ns)).collect();
    Aggregate {
        mean_ms: mean(&ms),
        median_ms: median(&ms),
        stddev_ms: population_stddev(&ms),
    }
}

//! Aggregated results: per-cell statistics, per-size rows, the full Report.

use serde::{Deserialize, Serialize};

use crate::types::ComplexityClass;

/// Mean, median and population standard deviation for one (size, class)
/// cell, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Arithmetic mean of the retained readings.
    pub mean_ms: f64,
    /// Median of the retained readings.
    pub median_ms: f64,
    /// Population standard deviation of the retained readings.
    pub stddev_ms: f64,
}

impl Aggregate {
    /// Sentinel for a cell whose probe failed to allocate its work array.
    pub fn failed() -> Self {
        Self {
            mean_ms: f64::NAN,
            median_ms: f64::NAN,
            stddev_ms: f64::NAN,
        }
    }

    /// Whether this cell carries the failure sentinel.
    pub fn is_failed(&self) -> bool {
        self.mean_ms.is_nan()
    }
}

/// Aggregates for all three classes at one input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    /// Input size n.
    pub n: usize,
    /// Binary-search cell.
    pub logn: Aggregate,
    /// Linear-sum cell.
    pub linear: Aggregate,
    /// Sort cell.
    pub nlogn: Aggregate,
}

impl SizeRow {
    /// Aggregate for the given class.
    pub fn class(&self, class: ComplexityClass) -> &Aggregate {
        match class {
            ComplexityClass::LogN => &self.logn,
            ComplexityClass::Linear => &self.linear,
            ComplexityClass::NLogN => &self.nlogn,
        }
    }
}

/// Full report: one row per scheduled size, in schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Host device label the run was configured with.
    pub device: String,
    /// Per-size rows in ascending schedule order.
    pub rows: Vec<SizeRow>,
}

impl Report {
    /// Schedule sizes as reals, for chart x-axes.
    pub fn xs(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.n as f64).collect()
    }

    /// Mean series for one class, in milliseconds.
    pub fn means_ms(&self, class: ComplexityClass) -> Vec<f64> {
        self.rows.iter().map(|row| row.class(class).mean_ms).collect()
    }

    /// Median series for one class, in milliseconds.
    pub fn medians_ms(&self, class: ComplexityClass) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.class(class).median_ms)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(v: f64) -> Aggregate {
        Aggregate {
            mean_ms: v,
            median_ms: v,
            stddev_ms: 0.0,
        }
    }

    fn two_row_report() -> Report {
        Report {
            device: "test-box".to_string(),
            rows: vec![
                SizeRow {
                    n: 1000,
                    logn: agg(0.001),
                    linear: agg(0.1),
                    nlogn: agg(1.0),
                },
                SizeRow {
                    n: 2000,
                    logn: agg(0.002),
                    linear: agg(0.2),
                    nlogn: agg(2.0),
                },
            ],
        }
    }

    #[test]
    fn series_extraction_follows_schedule_order() {
        let report = two_row_report();
        assert_eq!(report.xs(), vec![1000.0, 2000.0]);
        assert_eq!(report.means_ms(ComplexityClass::Linear), vec![0.1, 0.2]);
        assert_eq!(report.medians_ms(ComplexityClass::NLogN), vec![1.0, 2.0]);
    }

    #[test]
    fn failure_sentinel_is_nan() {
        let failed = Aggregate::failed();
        assert!(failed.is_failed());
        assert!(failed.mean_ms.is_nan());
        assert!(failed.median_ms.is_nan());
        assert!(failed.stddev_ms.is_nan());
        assert!(!agg(0.5).is_failed());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = two_row_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

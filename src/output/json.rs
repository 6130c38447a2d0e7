//! JSON serialization of the Report.

use crate::result::Report;

/// Serialize a Report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a Report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Aggregate, SizeRow};

    fn report() -> Report {
        Report {
            device: "test-box".to_string(),
            rows: vec![SizeRow {
                n: 1000,
                logn: Aggregate {
                    mean_ms: 0.001,
                    median_ms: 0.001,
                    stddev_ms: 0.0,
                },
                linear: Aggregate {
                    mean_ms: 0.05,
                    median_ms: 0.05,
                    stddev_ms: 0.0,
                },
                nlogn: Aggregate {
                    mean_ms: 0.9,
                    median_ms: 0.9,
                    stddev_ms: 0.0,
                },
            }],
        }
    }

    #[test]
    fn compact_json_contains_fields() {
        let json = to_json(&report()).unwrap();
        assert!(json.contains("\"device\":\"test-box\""));
        assert!(json.contains("\"mean_ms\":0.05"));
    }

    #[test]
    fn pretty_json_has_newlines() {
        let json = to_json_pretty(&report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("median_ms"));
    }
}

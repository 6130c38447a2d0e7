//! Deterministic textual reporter rows.

use crate::result::{Aggregate, SizeRow};
use crate::types::ComplexityClass;

/// Format one reporter row for a size.
///
/// Three fractional digits per numeric field, `.` as the decimal separator.
/// With `include_stddev` (the stabilized profile) each class carries a σ
/// field; the basic profile omits it. NaN sentinel cells print as `NaN`.
pub fn format_row(row: &SizeRow, include_stddev: bool) -> String {
    let mut line = format!("n={}", row.n);
    for class in [
        ComplexityClass::LogN,
        ComplexityClass::Linear,
        ComplexityClass::NLogN,
    ] {
        line.push_str(" | ");
        line.push_str(&format_cell(class, row.class(class), include_stddev));
    }
    line
}

fn format_cell(class: ComplexityClass, cell: &Aggregate, include_stddev: bool) -> String {
    if include_stddev {
        format!(
            "{} mean={:.3} ms median={:.3} ms σ={:.3}",
            class.label(),
            cell.mean_ms,
            cell.median_ms,
            cell.stddev_ms
        )
    } else {
        format!(
            "{} mean={:.3} ms median={:.3} ms",
            class.label(),
            cell.mean_ms,
            cell.median_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SizeRow {
        let agg = |mean, median, stddev| Aggregate {
            mean_ms: mean,
            median_ms: median,
            stddev_ms: stddev,
        };
        SizeRow {
            n: 16000,
            logn: agg(0.0012, 0.0004, 0.0001),
            linear: agg(0.0521, 0.0498, 0.0042),
            nlogn: agg(1.2341, 1.2001, 0.0999),
        }
    }

    #[test]
    fn stabilized_row_format() {
        let line = format_row(&row(), true);
        assert_eq!(
            line,
            "n=16000 | O(log n) mean=0.001 ms median=0.000 ms σ=0.000 \
             | O(n) mean=0.052 ms median=0.050 ms σ=0.004 \
             | O(n log n) mean=1.234 ms median=1.200 ms σ=0.100"
        );
    }

    #[test]
    fn basic_row_omits_stddev() {
        let line = format_row(&row(), false);
        assert!(!line.contains('σ'));
        assert!(line.starts_with("n=16000 | O(log n) mean=0.001 ms median=0.000 ms | O(n) "));
    }

    #[test]
    fn failed_cell_prints_nan() {
        let mut row = row();
        row.nlogn = Aggregate::failed();
        let line = format_row(&row, true);
        assert!(line.contains("O(n log n) mean=NaN ms median=NaN ms σ=NaN"));
    }

    #[test]
    fn decimal_separator_is_a_dot() {
        let line = format_row(&row(), true);
        assert!(line.contains("mean=1.234 ms"));
        assert!(!line.contains(','));
    }
}

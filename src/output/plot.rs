//! Plot adapter: Report arrays in, image files out.
//!
//! The core never talks to a rendering library directly. Charts are
//! assembled here as renderer-neutral [`ChartSpec`] values and handed to a
//! [`ChartRenderer`]; the production renderer lives in [`super::png`] and
//! tests substitute a recording mock. Rendering failures never invalidate
//! the textual report.

use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::result::Report;
use crate::statistics::ms_to_us;
use crate::types::ComplexityClass;

/// One named line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Y values, same length as the chart's x-axis.
    pub points: Vec<f64>,
}

/// A renderer-neutral line chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart title, already carrying the device label.
    pub title: String,
    /// Y-axis description including the unit.
    pub y_label: String,
    /// Schedule sizes as reals.
    pub xs: Vec<f64>,
    /// Line series to draw.
    pub series: Vec<Series>,
}

/// Narrow rendering seam: one chart to one image file.
pub trait ChartRenderer {
    /// Render `chart` to `path`.
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<(), RenderError>;
}

/// Per-class chart: mean and median series in microseconds for visibility.
pub fn class_chart(report: &Report, class: ComplexityClass) -> ChartSpec {
    ChartSpec {
        title: format!("{} — {}", class.label(), report.device),
        y_label: "Time (µs)".to_string(),
        xs: report.xs(),
        series: vec![
            Series {
                label: "Mean".to_string(),
                points: report.means_ms(class).into_iter().map(ms_to_us).collect(),
            },
            Series {
                label: "Median".to_string(),
                points: report
                    .medians_ms(class)
                    .into_iter()
                    .map(ms_to_us)
                    .collect(),
            },
        ],
    }
}

/// Combined chart: the three mean series together, in milliseconds.
pub fn combined_chart(report: &Report) -> ChartSpec {
    ChartSpec {
        title: format!("Mean Comparison — {}", report.device),
        y_label: "Time (ms)".to_string(),
        xs: report.xs(),
        series: ComplexityClass::EXECUTION_ORDER
            .into_iter()
            .map(|class| Series {
                label: class.label().to_string(),
                points: report.means_ms(class),
            })
            .collect(),
    }
}

/// Image path for one per-class chart, or the combined chart for `None`.
pub fn chart_path(out_dir: &Path, class: Option<ComplexityClass>, device: &str) -> PathBuf {
    let name = match class {
        Some(class) => format!("{}_plot_{}.png", class.file_stem(), device),
        None => format!("combined_mean_plot_{}.png", device),
    };
    out_dir.join(name)
}

/// Outcome of rendering the full chart set.
#[derive(Debug, Default)]
pub struct RenderSummary {
    /// Successfully written image paths, in render order.
    pub saved: Vec<PathBuf>,
    /// Failed charts with their intended paths.
    pub failures: Vec<(PathBuf, RenderError)>,
}

impl RenderSummary {
    /// True when every chart rendered.
    pub fn all_saved(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render the three per-class charts and the combined means chart.
///
/// Failures are collected per chart; one broken chart does not stop the
/// others from rendering.
pub fn render_report(
    report: &Report,
    out_dir: &Path,
    renderer: &dyn ChartRenderer,
) -> RenderSummary {
    let mut summary = RenderSummary::default();

    let mut charts = Vec::with_capacity(4);
    for class in [
        ComplexityClass::LogN,
        ComplexityClass::Linear,
        ComplexityClass::NLogN,
    ] {
        charts.push((
            class_chart(report, class),
            chart_path(out_dir, Some(class), &report.device),
        ));
    }
    charts.push((combined_chart(report), chart_path(out_dir, None, &report.device)));

    for (chart, path) in charts {
        match renderer.render(&chart, &path) {
            Ok(()) => summary.saved.push(path),
            Err(err) => summary.failures.push((path, err)),
        }
    }

    summary
}

//! Report emission: reporter rows, JSON export, and chart rendering.

pub mod json;
pub mod plot;
pub mod png;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use plot::{
    chart_path, class_chart, combined_chart, render_report, ChartRenderer, ChartSpec,
    RenderSummary, Series,
};
pub use png::PlottersRenderer;
pub use terminal::format_row;

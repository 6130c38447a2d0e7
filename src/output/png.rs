//! Plotters-backed PNG chart renderer.

use std::path::Path;

use plotters::prelude::*;

use crate::error::RenderError;
use crate::output::plot::{ChartRenderer, ChartSpec};

const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// Renders [`ChartSpec`]s as 800x600 PNG line charts with point markers
/// and an upper-left legend.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl PlottersRenderer {
    /// Renderer with the default 800x600 canvas.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pair x values with finite y values, dropping NaN sentinel cells.
fn finite_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys.iter())
        .filter(|(_, y)| y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect()
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<(), RenderError> {
        let series_points: Vec<Vec<(f64, f64)>> = chart
            .series
            .iter()
            .map(|s| finite_points(&chart.xs, &s.points))
            .collect();

        let x_max = chart.xs.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.02;
        let y_max = series_points
            .iter()
            .flatten()
            .map(|&(_, y)| y)
            .fold(0.0, f64::max)
            .max(f64::MIN_POSITIVE)
            * 1.05;

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        ctx.configure_mesh()
            .x_desc("n")
            .y_desc(chart.y_label.as_str())
            .draw()
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        for (idx, (series, points)) in chart.series.iter().zip(&series_points).enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

            ctx.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(|e| RenderError::Backend(e.to_string()))?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x - 10, y), (x + 10, y)], color.stroke_width(2))
                });

            ctx.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )
            .map_err(|e| RenderError::Backend(e.to_string()))?;
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| RenderError::Backend(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Backend(e.to_string()))?;
        Ok(())
    }
}

//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;

use crate::stats::FittedModel;
use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Display unavailable: {0}")]
    Display(String),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Unsupported image format '{0}' (expected .png or .svg)")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to draw the scatter plus fitted line.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub predicted: Vec<f64>,
    pub model: FittedModel,
    pub r_squared: Option<f64>,
}

impl ChartData {
    /// Observed `(x, y)` pairs in record order.
    pub fn observed_points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// `(x, prediction)` pairs sorted by x so the line is drawn left to right.
    pub fn fitted_points(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .x
            .iter()
            .copied()
            .zip(self.predicted.iter().copied())
            .collect();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        points
    }

    /// Axis range covering the observed and fitted x values.
    pub fn x_range(&self) -> Range<f64> {
        padded_range(&self.x)
    }

    /// Axis range covering both observed and predicted y values.
    pub fn y_range(&self) -> Range<f64> {
        let all: Vec<f64> = self.y.iter().chain(&self.predicted).copied().collect();
        padded_range(&all)
    }

    /// Caption line shown under the title.
    pub fn fit_caption(&self) -> String {
        match self.r_squared {
            Some(r2) => format!("{}   (R² = {:.4})", self.model.equation(), r2),
            None => self.model.equation(),
        }
    }
}

/// Data bounds widened by 5% of the span, or by 1.0 when the span is zero.
pub fn padded_range(values: &[f64]) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_infinite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

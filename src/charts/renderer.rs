//! Static Chart Renderer
//! Writes the scatter + fitted line chart to a PNG or SVG file.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. Fitted equation and R² as a sub caption
//! 3. Scatter of observed points (blue) with the fitted line (red)
//! 4. Legend in the upper left corner

use super::{ChartData, ChartError};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const POINT_COLOR: RGBColor = RGBColor(52, 152, 219);
const LINE_COLOR: RGBColor = RGBColor(231, 76, 60);
const POINT_RADIUS: i32 = 4;

/// Output file type, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(ChartError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart to `path`; the format follows the file extension.
    pub fn render_to_file(
        data: &ChartData,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), ChartError> {
        let format = ImageFormat::from_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                Self::draw(&root, data)
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                Self::draw(&root, data)
            }
        }?;

        log::info!("Chart written to {}", path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> Result<(), ChartError> {
        root.fill(&WHITE).map_err(render_err)?;

        let plot_area = root
            .titled(&data.title, ("sans-serif", 24))
            .map_err(render_err)?;

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(data.fit_caption(), ("sans-serif", 14))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(data.x_range(), data.y_range())
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc(data.x_label.as_str())
            .y_desc(data.y_label.as_str())
            .light_line_style(RGBColor(235, 235, 235))
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(
                data.observed_points()
                    .into_iter()
                    .map(|p| Circle::new(p, POINT_RADIUS, POINT_COLOR.mix(0.7).filled())),
            )
            .map_err(render_err)?
            .label("observed")
            .legend(|(x, y)| Circle::new((x + 10, y), POINT_RADIUS, POINT_COLOR.filled()));

        chart
            .draw_series(LineSeries::new(
                data.fitted_points(),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(render_err)?
            .label("fitted")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

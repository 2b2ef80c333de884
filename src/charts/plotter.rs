//! Chart Plotter Module
//! Draws the interactive scatter + fitted line chart using egui_plot.

use super::ChartData;
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points};

pub const POINT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const LINE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Creates interactive regression charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw observed points with the fitted line overlaid.
    pub fn draw_fit_chart(ui: &mut egui::Ui, chart_data: &ChartData) {
        let observed: PlotPoints = chart_data
            .observed_points()
            .into_iter()
            .map(|(x, y)| [x, y])
            .collect();
        let fitted: PlotPoints = chart_data
            .fitted_points()
            .into_iter()
            .map(|(x, y)| [x, y])
            .collect();

        let x_range = chart_data.x_range();
        let y_range = chart_data.y_range();

        Plot::new("regression_fit")
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(chart_data.x_label.clone())
            .y_axis_label(chart_data.y_label.clone())
            .include_x(x_range.start)
            .include_x(x_range.end)
            .include_y(y_range.start)
            .include_y(y_range.end)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(observed)
                        .radius(3.5)
                        .color(POINT_COLOR)
                        .name("observed"),
                );
                plot_ui.line(
                    Line::new(fitted)
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name("fitted"),
                );
            });
    }
}

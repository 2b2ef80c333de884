//! Fit Viewer Application
//! Single window showing the regression chart and fit summary.

use crate::charts::{ChartData, ChartError, ChartPlotter};
use egui::{RichText, TopBottomPanel};

/// Main application window.
pub struct FitViewerApp {
    chart_data: ChartData,
}

impl FitViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_data: ChartData) -> Self {
        Self { chart_data }
    }

    /// Open the viewer and block until the window is closed.
    pub fn run(chart_data: ChartData) -> Result<(), ChartError> {
        let title = chart_data.title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 720.0])
                .with_min_inner_size([480.0, 360.0])
                .with_title(title.clone()),
            ..Default::default()
        };

        log::info!("Opening chart window (close it to exit)");
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| Ok(Box::new(FitViewerApp::new(cc, chart_data)))),
        )
        .map_err(|e| ChartError::Display(e.to_string()))
    }
}

impl eframe::App for FitViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel - fitted equation
        TopBottomPanel::top("fit_summary").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(&self.chart_data.title).size(18.0).strong());
            ui.label(RichText::new(self.chart_data.fit_caption()).monospace());
            ui.add_space(4.0);
        });

        // Central panel - chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_fit_chart(ui, &self.chart_data);
        });
    }
}

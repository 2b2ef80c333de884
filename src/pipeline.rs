//! Load → fit → present pipeline.

use crate::charts::{ChartData, StaticChartRenderer};
use crate::config::Config;
use crate::data::{DataLoader, DataProcessor};
use crate::gui::FitViewerApp;
use crate::stats::{FitSummary, LinearRegression};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Result of fitting one input file.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub summary: FitSummary,
    pub chart: ChartData,
}

/// Use the configured input path, or ask for one with a file picker.
pub fn resolve_input(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.input {
        return Ok(path.clone());
    }

    rfd::FileDialog::new()
        .set_title("Select regression data")
        .add_filter("Data Files", &["csv", "txt"])
        .pick_file()
        .context("No input file selected")
}

/// Load the input file and fit a line through it.
pub fn fit_file(path: &Path, config: &Config) -> Result<FitOutcome> {
    log::info!("Loading {}", path.display());
    let loader = DataLoader::new(&config.x_column, &config.y_column);
    let dataset = loader
        .load_csv(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no data rows", path.display());
    }
    log::debug!(
        "Loaded {} rows with columns {:?}\n{}",
        dataset.len(),
        dataset.column_names(),
        dataset.dataframe()
    );

    let (x, y) = DataProcessor::feature_target(&dataset, &config.x_column, &config.y_column)?;

    let model = LinearRegression::fit(&x, &y).context("Cannot fit regression line")?;
    let predicted = LinearRegression::predict(&model, &x);
    let summary = LinearRegression::summarize(&model, &x, &y)?;

    log::info!(
        "Fitted {} points: {} (R² = {:.4}, RMSE = {:.4})",
        summary.n,
        model.equation(),
        summary.r_squared,
        summary.rmse
    );
    if let Some(p) = summary.slope_p_value {
        log::debug!("Slope p-value: {:.3e}", p);
    }

    let chart = ChartData {
        title: config.title.clone(),
        x_label: config.x_label.clone(),
        y_label: config.y_label.clone(),
        x,
        y,
        predicted,
        model,
        r_squared: Some(summary.r_squared),
    };

    Ok(FitOutcome { summary, chart })
}

/// Write the fit summary as pretty JSON.
pub fn write_report(summary: &FitSummary, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create report {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("Cannot write report {}", path.display()))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

/// Show the chart in a window, or write it to the configured image file.
pub fn present(chart: ChartData, config: &Config) -> Result<()> {
    match &config.output {
        Some(output) => {
            StaticChartRenderer::render_to_file(&chart, output, config.image_size())
                .with_context(|| format!("Cannot write chart {}", output.display()))?;
            if config.open {
                open::that(output)
                    .with_context(|| format!("Cannot open {}", output.display()))?;
            }
        }
        None => FitViewerApp::run(chart).context("Cannot display chart")?,
    }
    Ok(())
}

/// Run the whole program for one configuration.
pub fn run(config: &Config) -> Result<()> {
    let input = resolve_input(config)?;
    let outcome = fit_file(&input, config)?;

    if let Some(report) = &config.report {
        write_report(&outcome.summary, report)?;
    }

    present(outcome.chart, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoaderError;
    use crate::stats::RegressionError;
    use clap::Parser;
    use std::fs;

    fn config_for(path: &Path) -> Config {
        Config::try_parse_from(["regplot", path.to_str().unwrap()]).unwrap()
    }

    /// Write `contents` to a temp file, fit it, and delete the file again.
    fn fit_fixture(name: &str, contents: &str) -> Result<FitOutcome> {
        let path = std::env::temp_dir().join(format!(
            "regplot-{}-{}.txt",
            std::process::id(),
            name
        ));
        fs::write(&path, contents)?;
        let result = fit_file(&path, &config_for(&path));
        fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn test_exact_line_end_to_end() {
        let outcome = fit_fixture("exact", "1,3\n2,5\n3,7\n").unwrap();

        let model = outcome.summary.model;
        assert!((model.slope - 2.0).abs() < 1e-12);
        assert!((model.intercept - 1.0).abs() < 1e-12);
        for (p, e) in outcome.chart.predicted.iter().zip([3.0, 5.0, 7.0]) {
            assert!((p - e).abs() < 1e-12);
        }
        assert_eq!(outcome.chart.x_label, "population/(10,000)");
    }

    #[test]
    fn test_constant_target_end_to_end() {
        let outcome = fit_fixture("constant", "1,2\n2,2\n3,2\n").unwrap();

        assert!(outcome.summary.model.slope.abs() < 1e-12);
        assert!((outcome.summary.model.intercept - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_row_fails_before_fitting() {
        let err = fit_fixture("malformed", "1,3\n2\n3,7\n").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::Format { line: 2, .. })
        ));
    }

    #[test]
    fn test_single_record_is_insufficient() {
        let err = fit_fixture("single", "1,3\n").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RegressionError>(),
            Some(RegressionError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_overflowing_data_is_rejected() {
        let err = fit_fixture("overflow", "0,1e308\n1,-1e308\n").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RegressionError>(),
            Some(RegressionError::Overflow(_))
        ));
    }

    #[test]
    fn test_missing_input() {
        let path = std::env::temp_dir().join("regplot-pipeline-missing.txt");
        let err = fit_file(&path, &config_for(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::FileAccess { .. })
        ));
    }

    #[test]
    fn test_report_is_written() {
        let outcome = fit_fixture("report-input", "1,3\n2,5\n3,7\n4,9\n").unwrap();

        let report = std::env::temp_dir().join(format!(
            "regplot-{}-report.json",
            std::process::id()
        ));
        let written = write_report(&outcome.summary, &report);
        let text = fs::read_to_string(&report).unwrap_or_default();
        fs::remove_file(&report).ok();

        written.unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["n"], 4);
        assert!((json["slope"].as_f64().unwrap() - 2.0).abs() < 1e-12);
        assert!((json["r_squared"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_input_prefers_config() {
        let config = Config::parse_from(["regplot", "given.csv"]);
        assert_eq!(resolve_input(&config).unwrap(), PathBuf::from("given.csv"));
    }
}

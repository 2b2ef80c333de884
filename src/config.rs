//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "regplot")]
#[command(about = "Fit a least-squares line to two-column CSV data and plot it")]
#[command(version)]
#[command(long_about = r#"
Fit a least-squares line to two-column CSV data and plot it.

The input file has no header row: every line holds two comma separated
numbers, the feature (x) followed by the target (y).

Without --output the chart opens in a window and the program exits when
the window is closed. With --output the chart is written to a .png or .svg
file instead.

Set RUST_LOG=debug for more detailed logging.
"#)]
pub struct Config {
    /// Input CSV file (a file picker opens when omitted)
    pub input: Option<PathBuf>,

    /// Name given to the first column
    #[arg(long, default_value = "population")]
    pub x_column: String,

    /// Name given to the second column
    #[arg(long, default_value = "gdp")]
    pub y_column: String,

    /// Horizontal axis label
    #[arg(long, default_value = "population/(10,000)")]
    pub x_label: String,

    /// Vertical axis label
    #[arg(long, default_value = "profit/(10,000)")]
    pub y_label: String,

    /// Chart title
    #[arg(long, default_value = "Linear regression")]
    pub title: String,

    /// Write the chart to this .png or .svg file instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Open the written image with the system default viewer
    #[arg(long, requires = "output")]
    pub open: bool,

    /// Write slope, intercept and fit metrics as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Config {
    pub fn image_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

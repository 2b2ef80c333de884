//! regplot - Least squares line fitting & chart viewer
//!
//! Loads two-column CSV data, fits `y = slope * x + intercept` and plots the
//! fitted line over the raw points.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;
mod stats;

use clap::Parser;
use config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    log::debug!("{:?}", config);

    pipeline::run(&config)
}

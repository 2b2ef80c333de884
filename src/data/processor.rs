//! Data Processor Module
//! Extracts aligned feature/target vectors from a loaded dataset.

use polars::prelude::*;
use thiserror::Error;

use super::Dataset;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Column '{0}' not found")]
    MissingColumn(String),
    #[error("Column '{0}' contains missing values")]
    NullValues(String),
}

/// Handles column extraction and alignment.
pub struct DataProcessor;

impl DataProcessor {
    /// Read a column as `f64` values in row order.
    pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, ProcessorError> {
        let series = df
            .column(column)
            .map_err(|_| ProcessorError::MissingColumn(column.to_string()))?;
        let value_f64 = series.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        if value_ca.null_count() > 0 {
            return Err(ProcessorError::NullValues(column.to_string()));
        }

        Ok(value_ca.into_no_null_iter().collect())
    }

    /// Split a dataset into (feature, target) vectors.
    ///
    /// Both vectors come from the same frame, so index `i` of each belongs
    /// to record `i`.
    pub fn feature_target(
        dataset: &Dataset,
        x_column: &str,
        y_column: &str,
    ) -> Result<(Vec<f64>, Vec<f64>), ProcessorError> {
        let x = dataset.values(x_column)?;
        let y = dataset.values(y_column)?;
        debug_assert_eq!(x.len(), y.len());
        Ok((x, y))
    }
}

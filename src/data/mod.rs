//! Data module - CSV loading and column extraction

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};

use polars::prelude::*;

/// Immutable two-column numeric table loaded from disk.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Values of a numeric column in record order.
    pub fn values(&self, column: &str) -> Result<Vec<f64>, ProcessorError> {
        DataProcessor::column_values(&self.df, column)
    }

    /// Get a reference to the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }
}

//! CSV Data Loader Module
//! Reads header-less two-column CSV files into a named Polars DataFrame.

use polars::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Dataset;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed input at line {line}: {reason}")]
    Format { line: u64, reason: String },
    #[error("Both columns are named '{0}'")]
    DuplicateColumn(String),
    #[error("Failed to build data frame: {0}")]
    Frame(#[from] PolarsError),
}

/// Loads two-column numeric CSV data with caller supplied column names.
pub struct DataLoader {
    columns: [String; 2],
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new("population", "gdp")
    }
}

impl DataLoader {
    pub fn new(x_column: &str, y_column: &str) -> Self {
        Self {
            columns: [x_column.to_string(), y_column.to_string()],
        }
    }

    /// Load a CSV file from disk.
    pub fn load_csv(&self, file_path: &Path) -> Result<Dataset, LoaderError> {
        let file = File::open(file_path).map_err(|source| LoaderError::FileAccess {
            path: file_path.to_path_buf(),
            source,
        })?;

        log::debug!("Reading {}", file_path.display());
        self.read_csv(file).map_err(|err| match err {
            LoaderError::Format { .. }
            | LoaderError::DuplicateColumn(_)
            | LoaderError::Frame(_) => err,
            // Mid-stream read failure
            LoaderError::FileAccess { source, .. } => LoaderError::FileAccess {
                path: file_path.to_path_buf(),
                source,
            },
        })
    }

    /// Parse CSV rows from any reader.
    ///
    /// Every non-blank row must hold exactly two finite numeric fields.
    pub fn read_csv<R: Read>(&self, reader: R) -> Result<Dataset, LoaderError> {
        if self.columns[0] == self.columns[1] {
            return Err(LoaderError::DuplicateColumn(self.columns[0].clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut xs: Vec<f64> = Vec::new();
        let mut ys: Vec<f64> = Vec::new();

        for result in reader.records() {
            let record = result.map_err(Self::classify_csv_error)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            if record.len() != 2 {
                return Err(LoaderError::Format {
                    line,
                    reason: format!("expected 2 fields, found {}", record.len()),
                });
            }

            xs.push(Self::parse_field(&record[0], &self.columns[0], line)?);
            ys.push(Self::parse_field(&record[1], &self.columns[1], line)?);
        }

        let df = DataFrame::new(vec![
            Column::new(self.columns[0].as_str().into(), xs),
            Column::new(self.columns[1].as_str().into(), ys),
        ])?;

        log::debug!("Loaded {} rows", df.height());
        Ok(Dataset::new(df))
    }

    fn parse_field(field: &str, column: &str, line: u64) -> Result<f64, LoaderError> {
        match field.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(LoaderError::Format {
                line,
                reason: format!("{} value '{}' is not finite", column, field),
            }),
            Err(_) => Err(LoaderError::Format {
                line,
                reason: format!("{} value '{}' is not a number", column, field),
            }),
        }
    }

    fn classify_csv_error(err: csv::Error) -> LoaderError {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => LoaderError::FileAccess {
                path: PathBuf::new(),
                source,
            },
            csv::ErrorKind::Utf8 { err, .. } => LoaderError::Format {
                line,
                reason: err.to_string(),
            },
            other => LoaderError::Format {
                line,
                reason: format!("{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<Dataset, LoaderError> {
        DataLoader::default().read_csv(text.as_bytes())
    }

    #[test]
    fn test_names_columns_in_file_order() {
        let ds = load("6.1101,17.592\n5.5277,9.1302\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names(), vec!["population", "gdp"]);
        assert_eq!(ds.values("population").unwrap(), vec![6.1101, 5.5277]);
        assert_eq!(ds.values("gdp").unwrap(), vec![17.592, 9.1302]);
    }

    #[test]
    fn test_custom_column_names() {
        let ds = DataLoader::new("x", "y").read_csv("1,2\n".as_bytes()).unwrap();
        assert_eq!(ds.column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_trims_whitespace_and_skips_blank_lines() {
        let ds = load(" 1 , 3\n\n2,5\n").unwrap();
        assert_eq!(ds.values("population").unwrap(), vec![1.0, 2.0]);
        assert_eq!(ds.values("gdp").unwrap(), vec![3.0, 5.0]);
    }

    #[test]
    fn test_single_field_row_is_format_error() {
        match load("1,3\n2\n3,7\n") {
            Err(LoaderError::Format { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_field_is_format_error() {
        assert!(matches!(
            load("1,3,4\n"),
            Err(LoaderError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_field_is_format_error() {
        match load("1,3\n2,abc\n") {
            Err(LoaderError::Format { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_field_is_format_error() {
        assert!(matches!(load("inf,3\n"), Err(LoaderError::Format { .. })));
        assert!(matches!(load("1,NaN\n"), Err(LoaderError::Format { .. })));
    }

    #[test]
    fn test_header_row_is_rejected() {
        assert!(matches!(
            load("population,gdp\n1,3\n"),
            Err(LoaderError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input_gives_empty_dataset() {
        let ds = load("").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_duplicate_column_names_rejected() {
        let loader = DataLoader::new("a", "a");
        assert!(matches!(
            loader.read_csv("1,2\n".as_bytes()),
            Err(LoaderError::DuplicateColumn(name)) if name == "a"
        ));
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let path = std::env::temp_dir().join("regplot-loader-does-not-exist.csv");
        match DataLoader::default().load_csv(&path) {
            Err(LoaderError::FileAccess { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected file access error, got {:?}", other),
        }
    }
}

//! Stats module - Least squares fitting

mod regression;

pub use regression::{FitSummary, FittedModel, LinearRegression, RegressionError};

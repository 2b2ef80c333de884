//! Linear Regression Module
//! Closed-form ordinary least squares for a single feature.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegressionError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
    #[error("Feature has {x} values but target has {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("Numeric overflow: {0}")]
    Overflow(String),
}

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedModel {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedModel {
    pub fn predict_one(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Human readable equation, e.g. `y = 1.1930x - 3.8958`.
    pub fn equation(&self) -> String {
        let sign = if self.intercept < 0.0 { '-' } else { '+' };
        format!("y = {:.4}x {} {:.4}", self.slope, sign, self.intercept.abs())
    }
}

/// Fitted model plus goodness-of-fit metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitSummary {
    #[serde(flatten)]
    pub model: FittedModel,
    pub n: usize,
    pub r_squared: f64,
    pub rmse: f64,
    pub slope_std_error: Option<f64>,
    pub slope_p_value: Option<f64>,
}

/// Ordinary least squares fitter.
pub struct LinearRegression;

impl LinearRegression {
    /// Fit slope and intercept minimizing the sum of squared residuals.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<FittedModel, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(RegressionError::InsufficientData(format!(
                "need at least 2 observations, got {}",
                x.len()
            )));
        }
        if x.iter().all(|&v| v == x[0]) {
            return Err(RegressionError::InsufficientData(
                "feature has zero variance".to_string(),
            ));
        }

        let mean_x = x.mean();
        let mean_y = y.mean();

        let (ss_xx, ss_xy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
                let dx = xi - mean_x;
                (sxx + dx * dx, sxy + dx * (yi - mean_y))
            });

        if !ss_xx.is_finite() {
            return Err(RegressionError::Overflow(
                "sum of squared feature deviations is not finite".to_string(),
            ));
        }
        if ss_xx <= 0.0 {
            return Err(RegressionError::InsufficientData(
                "feature variance is not positive".to_string(),
            ));
        }

        let slope = ss_xy / ss_xx;
        let intercept = mean_y - slope * mean_x;

        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(RegressionError::Overflow(format!(
                "fitted line is not finite (slope {}, intercept {})",
                slope, intercept
            )));
        }

        Ok(FittedModel { slope, intercept })
    }

    /// Apply a fitted model to every element of `x`.
    pub fn predict(model: &FittedModel, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| model.predict_one(xi)).collect()
    }

    /// Compute fit metrics for a model against observed data.
    pub fn summarize(
        model: &FittedModel,
        x: &[f64],
        y: &[f64],
    ) -> Result<FitSummary, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let n = x.len();
        if n == 0 {
            return Err(RegressionError::InsufficientData(
                "no observations".to_string(),
            ));
        }

        let mean_x = x.mean();
        let mean_y = y.mean();

        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (yi - model.predict_one(xi)).powi(2))
            .sum();
        let ss_tot: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
        let ss_xx: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();

        // Constant target: perfect prediction scores 1, anything else 0
        let r_squared = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };
        let rmse = (ss_res / n as f64).sqrt();

        let (slope_std_error, slope_p_value) = if n > 2 && ss_xx > 0.0 {
            let dof = (n - 2) as f64;
            let se = (ss_res / dof / ss_xx).sqrt();
            (Some(se), Self::slope_p_value(model.slope, se, dof))
        } else {
            (None, None)
        };

        Ok(FitSummary {
            model: *model,
            n,
            r_squared,
            rmse,
            slope_std_error,
            slope_p_value,
        })
    }

    /// Two-tailed p-value for H0: slope == 0.
    fn slope_p_value(slope: f64, se: f64, dof: f64) -> Option<f64> {
        if se == 0.0 || !se.is_finite() {
            return None;
        }
        let t = slope / se;
        StudentsT::new(0.0, 1.0, dof)
            .ok()
            .map(|dist| 2.0 * (1.0 - dist.cdf(t.abs())))
    }
}

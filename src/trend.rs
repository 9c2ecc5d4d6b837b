//! Least-squares trend fitting over ordered numeric series

use crate::error::{ForecastError, Result};
use crate::metrics::{mean_absolute_error, r_squared};
use serde::Serialize;

/// Sign of the fitted slope.
///
/// A slope of exactly zero counts as `Decreasing`; the boundary is
/// "non-increasing", chosen so a flat series never reads as growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// A fitted line `y = slope * x + intercept` with its fit diagnostics.
///
/// Constructed fresh per forecast call from exactly the available
/// observations; never persisted or mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct TrendFit {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Fitted values aligned with the input observations
    pub fitted: Vec<f64>,
    /// Coefficient of determination in [0, 1]
    pub r_squared: f64,
    /// Mean absolute error over the fitted series
    pub mae: f64,
}

impl TrendFit {
    /// Fit over positional indices `0..n-1`.
    ///
    /// Used for monthly totals: a missing month does not renumber later
    /// months, so index distance is the regressor's x-axis.
    pub fn fit(values: &[f64]) -> Result<Self> {
        let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        Self::fit_xy(&xs, values)
    }

    /// Fit `y = slope * x + intercept` by ordinary least squares over
    /// caller-supplied x values (e.g. calendar ordinals).
    pub fn fit_xy(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ForecastError::InvalidInput(format!(
                "x and y lengths differ: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        let n = ys.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData(format!(
                "need at least 2 observations to fit a trend, got {}",
                n
            )));
        }

        let x_mean = xs.iter().sum::<f64>() / n as f64;
        let y_mean = ys.iter().sum::<f64>() / n as f64;

        let sxx: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
        if sxx == 0.0 {
            return Err(ForecastError::InvalidInput(
                "all x values are identical; the trend line is undefined".to_string(),
            ));
        }

        let sxy: f64 = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let fitted: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();

        let r_squared = r_squared(ys, &fitted)?;
        let mae = mean_absolute_error(ys, &fitted)?;

        Ok(Self {
            slope,
            intercept,
            fitted,
            r_squared,
            mae,
        })
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Direction of the fitted trend
    pub fn direction(&self) -> TrendDirection {
        if self.slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

//! Goodness-of-fit metrics for fitted series

use crate::error::{ForecastError, Result};

fn check_aligned(actual: &[f64], fitted: &[f64]) -> Result<()> {
    if actual.len() != fitted.len() || actual.is_empty() {
        return Err(ForecastError::InvalidInput(
            "actual and fitted values must have the same non-zero length".to_string(),
        ));
    }
    Ok(())
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// A perfectly constant series has zero total variance; the degenerate
/// flat line fits it exactly, so this reports 1.0 instead of 0/0.
pub fn r_squared(actual: &[f64], fitted: &[f64]) -> Result<f64> {
    check_aligned(actual, fitted)?;

    let n = actual.len() as f64;
    let mean = actual.iter().sum::<f64>() / n;

    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return Ok(1.0);
    }

    let ss_res: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    Ok(1.0 - ss_res / ss_tot)
}

/// Mean absolute error between actual and fitted values
pub fn mean_absolute_error(actual: &[f64], fitted: &[f64]) -> Result<f64> {
    check_aligned(actual, fitted)?;

    let n = actual.len() as f64;
    let sum: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(y, y_hat)| (y - y_hat).abs())
        .sum();

    Ok(sum / n)
}

/// Mean squared error between actual and fitted values
pub fn mean_squared_error(actual: &[f64], fitted: &[f64]) -> Result<f64> {
    check_aligned(actual, fitted)?;

    let n = actual.len() as f64;
    let sum: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    Ok(sum / n)
}

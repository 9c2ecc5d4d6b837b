//! Single-step expense forecasting

use crate::aggregate::{aggregate_monthly, MonthlyBucket};
use crate::data::MonetaryRecord;
use crate::error::Result;
use crate::trend::{TrendDirection, TrendFit};
use serde::Serialize;

/// Outcome of a next-period forecast request.
///
/// Insufficient history is an ordinary outcome the web layer renders as a
/// message, not an error, so it is carried in the `Ok` value.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastOutcome {
    /// Fewer than two aggregated months; no trend can be fitted
    InsufficientData {
        /// How many distinct months the records covered
        months_available: usize,
    },
    /// A fitted forecast
    Success(ExpenseForecast),
}

/// A successful next-period forecast with its diagnostics and the series
/// it was fitted on, so the caller can chart both together.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseForecast {
    /// Point estimate for the next period, clamped at zero
    pub predicted_value: f64,
    /// Direction of the fitted trend
    pub trend_direction: TrendDirection,
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Mean absolute error of the fit
    pub mae: f64,
    /// Monthly series the fit was computed over
    pub months: Vec<MonthlyBucket>,
}

/// Forecast the next calendar month's total from dated records.
///
/// Aggregates records into monthly buckets, fits a least-squares trend
/// over the bucket index, and evaluates it one step past the observed
/// series. A negative projection is reported as zero; a predicted
/// negative expense is not a valid forecast.
pub fn forecast_next_period(records: &[MonetaryRecord]) -> Result<ForecastOutcome> {
    let months = aggregate_monthly(records);
    if months.len() < 2 {
        return Ok(ForecastOutcome::InsufficientData {
            months_available: months.len(),
        });
    }

    let totals: Vec<f64> = months.iter().map(|m| m.total).collect();
    let fit = TrendFit::fit(&totals)?;

    let predicted_value = fit.predict(totals.len() as f64).max(0.0);

    Ok(ForecastOutcome::Success(ExpenseForecast {
        predicted_value,
        trend_direction: fit.direction(),
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        mae: fit.mae,
        months,
    }))
}

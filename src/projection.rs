//! Multi-step investment projection with a volatility cone

use crate::data::{PriceHistoryProvider, PriceSeries};
use crate::error::{ForecastError, Result};
use crate::trend::TrendFit;
use crate::volatility::daily_return_volatility;
use chrono::{Datelike, Duration};
use serde::Serialize;

/// Policy constants for the projection cone.
///
/// These are heuristics, not derived quantities; callers may tune them
/// per deployment instead of relying on the defaults.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Minimum number of observed prices required before fitting
    pub min_history: usize,
    /// Daily volatility assumed when the sample estimate is undefined
    pub default_daily_volatility: f64,
    /// Trading days per month, used to scale daily volatility to a step
    pub trading_days_per_month: f64,
    /// Calendar days between successive projection steps
    pub days_per_step: i64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            min_history: 30,
            default_daily_volatility: 0.02,
            trading_days_per_month: 21.0,
            days_per_step: 30,
        }
    }
}

/// One projected future period in currency space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Future period label, `MM/YYYY`
    pub horizon_label: String,
    /// Trend value of the position
    pub expected_value: f64,
    /// Upper band of the uncertainty cone
    pub optimistic_value: f64,
    /// Lower band of the uncertainty cone; may be negative relative to
    /// the invested amount, a capital-loss scenario is representable
    pub pessimistic_value: f64,
}

/// Projection of an invested amount over a multi-month horizon
#[derive(Debug, Clone, Serialize)]
pub struct PriceProjection {
    /// Symbol the projection was computed for
    pub symbol: String,
    /// Most recent observed closing price
    pub current_price: f64,
    /// Invested amount divided by the most recent close
    pub shares: f64,
    /// Daily return volatility used for the cone
    pub daily_return_std: f64,
    /// One point per requested future month, ascending by horizon
    pub points: Vec<ProjectionPoint>,
}

/// Project an invested amount forward against a historical price series.
///
/// Fits a least-squares trend over calendar ordinals, estimates daily
/// return volatility (with the configured fallback when undefined), and
/// emits one point per horizon month. The uncertainty band scales with
/// the square root of elapsed steps and is proportional to the projected
/// price level. The pessimistic branch is not clamped at zero.
pub fn project_investment(
    symbol: &str,
    history: &PriceSeries,
    invested_amount: f64,
    horizon_months: u32,
    config: &ProjectionConfig,
) -> Result<PriceProjection> {
    if invested_amount <= 0.0 {
        return Err(ForecastError::InvalidInput(format!(
            "invested amount must be positive, got {}",
            invested_amount
        )));
    }
    if horizon_months == 0 {
        return Err(ForecastError::InvalidInput(
            "projection horizon must be at least one month".to_string(),
        ));
    }
    if history.len() < config.min_history {
        return Err(ForecastError::InsufficientData(format!(
            "need at least {} observed prices, got {}",
            config.min_history,
            history.len()
        )));
    }

    let last = match history.last() {
        Some(last) => *last,
        None => {
            return Err(ForecastError::InsufficientData(
                "price history is empty".to_string(),
            ))
        }
    };
    if last.close <= 0.0 {
        return Err(ForecastError::InvalidInput(format!(
            "most recent close must be positive, got {}",
            last.close
        )));
    }

    let closes = history.closes();
    let ordinals = history.ordinals();
    let fit = TrendFit::fit_xy(&ordinals, &closes)?;

    let daily_return_std = daily_return_volatility(&closes, config.default_daily_volatility);
    let step_volatility = daily_return_std * config.trading_days_per_month.sqrt();

    let shares = invested_amount / last.close;

    let mut points = Vec::with_capacity(horizon_months as usize);
    for i in 1..=horizon_months {
        let future_date = last.date + Duration::days(i as i64 * config.days_per_step);
        let trend_price = fit.predict(future_date.num_days_from_ce() as f64);

        // Cumulative uncertainty grows with the square root of elapsed
        // steps and is relative to the projected price level.
        let uncertainty = step_volatility * (i as f64).sqrt() * trend_price;

        points.push(ProjectionPoint {
            horizon_label: future_date.format("%m/%Y").to_string(),
            expected_value: trend_price * shares,
            optimistic_value: (trend_price + uncertainty) * shares,
            pessimistic_value: (trend_price - uncertainty) * shares,
        });
    }

    Ok(PriceProjection {
        symbol: symbol.to_string(),
        current_price: last.close,
        shares,
        daily_return_std,
        points,
    })
}

/// Fetch a symbol's history from the collaborator and project it.
///
/// The provider is invoked once per request; a fetch failure or an empty
/// window is fatal to this request only, reported as
/// [`ForecastError::UpstreamUnavailable`] with no retry here.
pub fn project_symbol<P: PriceHistoryProvider>(
    provider: &P,
    symbol: &str,
    invested_amount: f64,
    horizon_months: u32,
    config: &ProjectionConfig,
) -> Result<PriceProjection> {
    let history = provider.fetch(symbol).map_err(|e| {
        ForecastError::UpstreamUnavailable(format!(
            "price history for '{}' unavailable: {}",
            symbol, e
        ))
    })?;

    if history.is_empty() {
        return Err(ForecastError::UpstreamUnavailable(format!(
            "no price history returned for '{}'",
            symbol
        )));
    }

    project_investment(symbol, &history, invested_amount, horizon_months, config)
}

//! # Finance Forecast
//!
//! A Rust library implementing the forecasting engine of a personal-finance
//! application.
//!
//! ## Features
//!
//! - Calendar-month aggregation of dated monetary records
//! - Ordinary least-squares trend fitting with goodness-of-fit metrics
//! - Single-step expense forecasting (negative projections clamp to zero)
//! - Multi-step investment projection with a volatility-driven
//!   optimistic/pessimistic uncertainty cone
//! - CSV ingestion for expense records and historical price series
//!
//! The engine is stateless and synchronous: every call is pure with respect
//! to its inputs, performs no I/O of its own, and returns plain serializable
//! values. Storage, routing, and market-data fetching belong to the caller;
//! external price lookups go through the [`data::PriceHistoryProvider`] seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use finance_forecast::data::MonetaryRecord;
//! use finance_forecast::forecast::{forecast_next_period, ForecastOutcome};
//!
//! let records = vec![
//!     MonetaryRecord::new("groceries", 1000.0, "2024-01-15"),
//!     MonetaryRecord::new("groceries", 2000.0, "2024-02-15"),
//!     MonetaryRecord::new("groceries", 3000.0, "2024-03-15"),
//! ];
//!
//! let outcome = forecast_next_period(&records).unwrap();
//! match outcome {
//!     ForecastOutcome::Success(forecast) => {
//!         assert!((forecast.predicted_value - 4000.0).abs() < 1e-6);
//!     }
//!     ForecastOutcome::InsufficientData { .. } => unreachable!(),
//! }
//! ```

pub mod aggregate;
pub mod data;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod projection;
pub mod trend;
pub mod volatility;

// Re-export commonly used types
pub use crate::aggregate::{aggregate_monthly, totals_by_category, CategoryTotal, MonthlyBucket};
pub use crate::data::{
    CsvPriceHistory, DataLoader, MonetaryRecord, PriceHistoryProvider, PricePoint, PriceSeries,
};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{forecast_next_period, ExpenseForecast, ForecastOutcome};
pub use crate::projection::{
    project_investment, project_symbol, PriceProjection, ProjectionConfig, ProjectionPoint,
};
pub use crate::trend::{TrendDirection, TrendFit};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

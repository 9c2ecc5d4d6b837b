//! Error types for the finance_forecast crate

use thiserror::Error;

/// Custom error types for the finance_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough observations to fit a trend or project from it
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A caller-supplied argument is out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external price-history collaborator failed or returned nothing
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Malformed data encountered while loading
    #[error("data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<polars::prelude::PolarsError> for ForecastError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

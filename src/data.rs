//! Record and price-series types, date parsing, and CSV ingestion

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Category assigned to records that arrive without one
pub const DEFAULT_CATEGORY: &str = "General";

/// A dated monetary record as the storage layer hands it over.
///
/// The date is kept as the raw string the caller stored; it is parsed at
/// the aggregation boundary so that a single malformed record never
/// poisons a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryRecord {
    /// Free-text description
    pub description: String,
    /// Signed amount (expenses are positive in the expense ledger)
    pub amount: f64,
    /// Optional category label
    pub category: Option<String>,
    /// Raw date string, ISO `YYYY-MM-DD` or `DD/MM/YYYY`
    pub date: String,
}

impl MonetaryRecord {
    /// Create a record without a category
    pub fn new(description: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: None,
            date: date.into(),
        }
    }

    /// Attach a category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Parse a record date.
///
/// Accepts ISO `YYYY-MM-DD` (with or without a time component) and the
/// form-entry format `DD/MM/YYYY`, which is normalized to a calendar date
/// before aggregation. Returns `None` for anything else.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

/// A single observed closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

/// An ordered historical price series over a lookback window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from observed points, sorting ascending by date
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// The observed points, ascending by date
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Calendar ordinals (days since the Common Era) in date order.
    ///
    /// The investment regressor fits over these rather than positional
    /// indices, because future evaluation points are irregular calendar
    /// steps rather than uniform indices.
    pub fn ordinals(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.date.num_days_from_ce() as f64)
            .collect()
    }

    /// Most recent observation, if any
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// External collaborator supplying historical prices for a symbol.
///
/// Implementations may block or fail on network conditions; the engine
/// maps any failure to an ordinary error result and never retries.
pub trait PriceHistoryProvider {
    /// Fetch the lookback window of closing prices for `symbol`
    fn fetch(&self, symbol: &str) -> Result<PriceSeries>;
}

/// Price history backed by per-symbol CSV files in a directory.
///
/// Used by tests and offline runs; a live market-data client would be
/// another implementation of the same trait.
#[derive(Debug, Clone)]
pub struct CsvPriceHistory {
    root: PathBuf,
}

impl CsvPriceHistory {
    /// Serve `<root>/<SYMBOL>.csv` files
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PriceHistoryProvider for CsvPriceHistory {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries> {
        let name = symbol.trim().to_uppercase();
        let path = self.root.join(format!("{}.csv", name));
        DataLoader::prices_from_csv(path)
    }
}

/// Loader for CSV-shaped expense and price data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load monetary records from a CSV file with `date` and `amount`
    /// columns and optional `description` and `category` columns.
    ///
    /// Rows with a missing or non-numeric amount are skipped, matching
    /// the tolerant import semantics of the surrounding application.
    pub fn records_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MonetaryRecord>> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::records_from_dataframe(&df)
    }

    /// Extract monetary records from an existing DataFrame
    pub fn records_from_dataframe(df: &DataFrame) -> Result<Vec<MonetaryRecord>> {
        let height = df.height();
        let dates = Self::string_column(df, "date")?;
        let amounts = Self::numeric_column(df, "amount")?;
        let descriptions = Self::optional_string_column(df, "description", height)?;
        let categories = Self::optional_string_column(df, "category", height)?;

        let mut records = Vec::with_capacity(height);
        for i in 0..height {
            let amount = match amounts[i] {
                Some(amount) => amount,
                None => {
                    log::warn!("skipping row {}: amount missing or not numeric", i);
                    continue;
                }
            };
            let date = match &dates[i] {
                Some(date) => date.clone(),
                None => {
                    log::warn!("skipping row {}: date missing", i);
                    continue;
                }
            };

            records.push(MonetaryRecord {
                description: descriptions[i].clone().unwrap_or_default(),
                amount,
                category: categories[i].clone(),
                date,
            });
        }

        Ok(records)
    }

    /// Load a historical price series from a CSV file.
    ///
    /// The date column is detected by name (`date`, `time`, `timestamp`),
    /// the price column likewise (`close`, then `price`). Rows with an
    /// unparseable date or missing price are skipped.
    pub fn prices_from_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::prices_from_dataframe(&df)
    }

    /// Extract a price series from an existing DataFrame
    pub fn prices_from_dataframe(df: &DataFrame) -> Result<PriceSeries> {
        let date_column = Self::detect_column(df, &["date", "time", "timestamp"])?;
        let close_column = Self::detect_column(df, &["close", "price"])?;

        let dates = Self::string_column(df, &date_column)?;
        let closes = Self::numeric_column(df, &close_column)?;

        let mut points = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            match (dates[i].as_deref().and_then(parse_record_date), closes[i]) {
                (Some(date), Some(close)) => points.push(PricePoint { date, close }),
                _ => log::warn!("skipping price row {}: bad date or close", i),
            }
        }

        Ok(PriceSeries::new(points))
    }

    /// Find the first column whose lowercased name contains one of the
    /// candidate substrings
    fn detect_column(df: &DataFrame, candidates: &[&str]) -> Result<String> {
        let column_names = df.get_column_names();

        for candidate in candidates {
            for name in &column_names {
                if name.to_lowercase().contains(candidate) {
                    return Ok(name.to_string());
                }
            }
        }

        Err(ForecastError::DataError(format!(
            "no column matching any of {:?} found in data",
            candidates
        )))
    }

    /// Read a column as per-row optional strings
    fn string_column(df: &DataFrame, column_name: &str) -> Result<Vec<Option<String>>> {
        let col = df.column(column_name).map_err(|e| {
            ForecastError::DataError(format!("column '{}' not found: {}", column_name, e))
        })?;

        match col.dtype() {
            DataType::Utf8 => Ok(col
                .utf8()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect()),
            other => Err(ForecastError::DataError(format!(
                "column '{}' has type {:?}, expected strings",
                column_name, other
            ))),
        }
    }

    /// Read an optional column as per-row strings, `None`-filled when the
    /// column is absent
    fn optional_string_column(
        df: &DataFrame,
        column_name: &str,
        height: usize,
    ) -> Result<Vec<Option<String>>> {
        let present = df
            .get_column_names()
            .iter()
            .any(|name| *name == column_name);
        if !present {
            return Ok(vec![None; height]);
        }
        Self::string_column(df, column_name)
    }

    /// Read a column as per-row optional f64 values.
    ///
    /// String columns are parsed per row so that one junk cell drops one
    /// row instead of failing the whole load.
    fn numeric_column(df: &DataFrame, column_name: &str) -> Result<Vec<Option<f64>>> {
        let col = df.column(column_name).map_err(|e| {
            ForecastError::DataError(format!("column '{}' not found: {}", column_name, e))
        })?;

        match col.dtype() {
            DataType::Float64 => Ok(col
                .f64()
                .map_err(ForecastError::from)?
                .into_iter()
                .collect()),
            DataType::Float32 => Ok(col
                .f32()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(|v| v as f64))
                .collect()),
            DataType::Int64 => Ok(col
                .i64()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(|v| v as f64))
                .collect()),
            DataType::Int32 => Ok(col
                .i32()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(|v| v as f64))
                .collect()),
            DataType::UInt64 => Ok(col
                .u64()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(|v| v as f64))
                .collect()),
            DataType::UInt32 => Ok(col
                .u32()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.map(|v| v as f64))
                .collect()),
            DataType::Utf8 => Ok(col
                .utf8()
                .map_err(ForecastError::from)?
                .into_iter()
                .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
                .collect()),
            other => Err(ForecastError::DataError(format!(
                "column '{}' has type {:?}, cannot be read as numbers",
                column_name, other
            ))),
        }
    }
}

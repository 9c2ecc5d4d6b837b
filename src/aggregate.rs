//! Calendar-month aggregation of monetary records

use crate::data::{parse_record_date, MonetaryRecord, DEFAULT_CATEGORY};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Total amount recorded in one calendar month.
///
/// Buckets are derived per request, unique per (year, month), and sorted
/// strictly ascending by period. Months with no matching records are
/// absent; gaps are not zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Human-readable month name, e.g. "Jan 2024"
    pub label: String,
    /// Sum of amounts in this period
    pub total: f64,
}

impl MonthlyBucket {
    /// Period key identifying this bucket
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

/// Total amount recorded under one category label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Sum of amounts under this category
    pub total: f64,
}

fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%b %Y").to_string(),
        None => format!("{:02}/{}", month, year),
    }
}

/// Group records into calendar-month buckets, summed and sorted ascending
/// by period.
///
/// Records with an unparseable date are skipped; a few bad date strings
/// degrade the batch gracefully instead of failing it.
pub fn aggregate_monthly(records: &[MonetaryRecord]) -> Vec<MonthlyBucket> {
    let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for record in records {
        let date = match parse_record_date(&record.date) {
            Some(date) => date,
            None => {
                log::warn!("skipping record with unparseable date {:?}", record.date);
                continue;
            }
        };

        *totals.entry((date.year(), date.month())).or_insert(0.0) += record.amount;
    }

    totals
        .into_iter()
        .map(|((year, month), total)| MonthlyBucket {
            year,
            month,
            label: month_label(year, month),
            total,
        })
        .collect()
}

/// Sum of amounts per category, largest first.
///
/// Records without a category fall into the default bucket. Ties keep
/// alphabetical order.
pub fn totals_by_category(records: &[MonetaryRecord]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        let category = record.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        *totals.entry(category).or_insert(0.0) += record.amount;
    }

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    out.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    out
}

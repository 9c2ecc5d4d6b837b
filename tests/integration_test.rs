use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use finance_forecast::data::{CsvPriceHistory, DataLoader};
use finance_forecast::forecast::{forecast_next_period, ForecastOutcome};
use finance_forecast::projection::{project_symbol, ProjectionConfig};
use finance_forecast::trend::TrendDirection;
use finance_forecast::{aggregate_monthly, totals_by_category};
use pretty_assertions::assert_eq;
use std::fmt::Write as _;
use std::fs;

#[test]
fn expense_pipeline_from_csv_to_forecast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    fs::write(
        &path,
        "description,amount,category,date\n\
         groceries,100,Food,2024-01-10\n\
         transport,200,Transport,20/01/2024\n\
         rent,400,Housing,2024-02-05\n\
         groceries,500,Food,2024-03-12\n\
         typo,oops,Food,2024-03-13\n",
    )
    .unwrap();

    let records = DataLoader::records_from_csv(&path).unwrap();
    assert_eq!(records.len(), 4);

    let buckets = aggregate_monthly(&records);
    assert_eq!(buckets.len(), 3);
    assert_approx_eq!(buckets[0].total, 300.0, 1e-9);

    let outcome = forecast_next_period(&records).unwrap();
    let forecast = match outcome {
        ForecastOutcome::Success(forecast) => forecast,
        other => panic!("expected success, got {:?}", other),
    };

    // Monthly totals 300, 400, 500 continue to 600
    assert_approx_eq!(forecast.predicted_value, 600.0, 1e-6);
    assert_eq!(forecast.trend_direction, TrendDirection::Increasing);

    let by_category = totals_by_category(&records);
    assert_eq!(by_category[0].category, "Food");
    assert_approx_eq!(by_category[0].total, 600.0, 1e-9);
}

#[test]
fn investment_pipeline_from_csv_provider_to_projection() {
    let dir = tempfile::tempdir().unwrap();

    // 45 trading days drifting upward
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut csv = String::from("date,close\n");
    for i in 0..45 {
        let date = first + Duration::days(i);
        writeln!(csv, "{},{}", date.format("%Y-%m-%d"), 20.0 + 0.25 * i as f64).unwrap();
    }
    fs::write(dir.path().join("ACME.csv"), csv).unwrap();

    let provider = CsvPriceHistory::new(dir.path());
    let projection =
        project_symbol(&provider, "acme", 2000.0, 6, &ProjectionConfig::default()).unwrap();

    assert_eq!(projection.points.len(), 6);
    assert_approx_eq!(projection.current_price, 31.0, 1e-9);
    assert_approx_eq!(projection.shares, 2000.0 / 31.0, 1e-9);

    // Rising trend, widening band
    let mut previous_width = 0.0;
    for point in &projection.points {
        let width = point.optimistic_value - point.pessimistic_value;
        assert!(width >= previous_width - 1e-9);
        previous_width = width;
    }

    let json = serde_json::to_value(&projection).unwrap();
    assert_eq!(json["points"].as_array().unwrap().len(), 6);
    assert!(json["daily_return_std"].as_f64().unwrap() > 0.0);
}

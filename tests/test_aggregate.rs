use assert_approx_eq::assert_approx_eq;
use finance_forecast::aggregate::{aggregate_monthly, totals_by_category};
use finance_forecast::data::MonetaryRecord;
use pretty_assertions::assert_eq;

#[test]
fn sums_records_into_month_buckets() {
    let records = vec![
        MonetaryRecord::new("rent", 900.0, "2024-02-01"),
        MonetaryRecord::new("groceries", 125.5, "2024-01-15"),
        MonetaryRecord::new("utilities", 74.5, "2024-01-28"),
    ];

    let buckets = aggregate_monthly(&records);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].key(), (2024, 1));
    assert_eq!(buckets[0].label, "Jan 2024");
    assert_approx_eq!(buckets[0].total, 200.0, 1e-9);
    assert_eq!(buckets[1].key(), (2024, 2));
    assert_approx_eq!(buckets[1].total, 900.0, 1e-9);
}

#[test]
fn buckets_are_sorted_ascending_across_years() {
    let records = vec![
        MonetaryRecord::new("a", 1.0, "2024-01-10"),
        MonetaryRecord::new("b", 2.0, "2023-12-10"),
        MonetaryRecord::new("c", 3.0, "2023-02-10"),
    ];

    let keys: Vec<_> = aggregate_monthly(&records).iter().map(|b| b.key()).collect();
    assert_eq!(keys, vec![(2023, 2), (2023, 12), (2024, 1)]);
}

#[test]
fn both_date_formats_land_in_the_same_bucket() {
    let records = vec![
        MonetaryRecord::new("iso", 10.0, "2024-01-15"),
        MonetaryRecord::new("form", 5.0, "15/01/2024"),
    ];

    let buckets = aggregate_monthly(&records);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].key(), (2024, 1));
    assert_approx_eq!(buckets[0].total, 15.0, 1e-9);
}

#[test]
fn malformed_dates_are_skipped_without_failing() {
    let records = vec![
        MonetaryRecord::new("good", 10.0, "2024-01-15"),
        MonetaryRecord::new("bad", 5.0, "bad"),
        MonetaryRecord::new("worse", 7.0, "2024-13-40"),
    ];

    let buckets = aggregate_monthly(&records);

    assert_eq!(buckets.len(), 1);
    assert_approx_eq!(buckets[0].total, 10.0, 1e-9);
}

#[test]
fn empty_input_yields_empty_series() {
    assert!(aggregate_monthly(&[]).is_empty());
}

#[test]
fn gaps_are_not_zero_filled() {
    let records = vec![
        MonetaryRecord::new("jan", 100.0, "2024-01-05"),
        MonetaryRecord::new("apr", 400.0, "2024-04-05"),
    ];

    let buckets = aggregate_monthly(&records);

    // Only the months actually present; February and March are absent
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].key(), (2024, 1));
    assert_eq!(buckets[1].key(), (2024, 4));
}

#[test]
fn category_totals_sort_descending() {
    let records = vec![
        MonetaryRecord::new("bus", 20.0, "2024-01-02").with_category("Transport"),
        MonetaryRecord::new("rent", 900.0, "2024-01-03").with_category("Housing"),
        MonetaryRecord::new("bread", 30.0, "2024-01-04").with_category("Food"),
        MonetaryRecord::new("cheese", 45.0, "2024-01-05").with_category("Food"),
    ];

    let totals = totals_by_category(&records);

    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0].category, "Housing");
    assert_approx_eq!(totals[0].total, 900.0, 1e-9);
    assert_eq!(totals[1].category, "Food");
    assert_approx_eq!(totals[1].total, 75.0, 1e-9);
    assert_eq!(totals[2].category, "Transport");
}

#[test]
fn uncategorized_records_use_the_default_label() {
    let records = vec![
        MonetaryRecord::new("misc", 12.0, "2024-01-02"),
        MonetaryRecord::new("misc", 8.0, "2024-01-03"),
    ];

    let totals = totals_by_category(&records);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].category, "General");
    assert_approx_eq!(totals[0].total, 20.0, 1e-9);
}

// ABOUTME: Integration tests for the daily aggregator
// ABOUTME: Validates failure isolation, rounding, determinism, and zero defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    at, init_test_logging, provider_with_full_day, series_record, test_date, test_day,
    weight_record,
};
use std::sync::Arc;
use vitalsync::aggregator::DailyAggregator;
use vitalsync::models::RecordType;
use vitalsync::providers::errors::ProviderError;
use vitalsync::providers::HealthDataProvider;
use vitalsync::providers::synthetic::SyntheticHealthProvider;

#[tokio::test]
async fn empty_day_yields_all_zero_snapshot() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::new());
    let aggregator = DailyAggregator::new(provider);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.date, test_date());
}

#[tokio::test]
async fn full_day_aggregates_every_metric() {
    init_test_logging();
    let provider = Arc::new(provider_with_full_day(test_date()));
    let aggregator = DailyAggregator::new(provider);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();

    assert!((snapshot.sleep_minutes - 450.0).abs() < f64::EPSILON);
    assert!((snapshot.steps - 8345.0).abs() < f64::EPSILON);
    assert!((snapshot.distance_km - 6.12).abs() < f64::EPSILON);
    assert!((snapshot.total_calories_kcal - 2105.0).abs() < f64::EPSILON);
    assert!((snapshot.active_calories_kcal - 488.0).abs() < f64::EPSILON);
    assert!((snapshot.heart_rate_bpm - 72.0).abs() < f64::EPSILON);
    assert!((snapshot.oxygen_saturation_pct - 97.8).abs() < f64::EPSILON);
    assert!((snapshot.steps_cadence - 108.0).abs() < f64::EPSILON);
    assert!((snapshot.resting_heart_rate_bpm - 57.0).abs() < f64::EPSILON);
    assert!((snapshot.weight_kg - 71.3).abs() < f64::EPSILON); // 71.25 rounds to 1 decimal
    assert!((snapshot.height_m - 1.78).abs() < f64::EPSILON);
    assert!(!snapshot.is_empty());
}

#[tokio::test]
async fn aggregation_is_deterministic_for_the_same_input() {
    init_test_logging();
    let provider = Arc::new(provider_with_full_day(test_date()));
    let aggregator = DailyAggregator::new(provider);

    let first = aggregator.aggregate(test_date()).await.unwrap();
    let second = aggregator.aggregate(test_date()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn single_metric_failure_defaults_to_zero_and_keeps_the_rest() {
    init_test_logging();
    let provider = Arc::new(provider_with_full_day(test_date()));
    provider.fail_record_type(RecordType::Steps).unwrap();
    let aggregator =
        DailyAggregator::new(Arc::clone(&provider) as Arc<dyn HealthDataProvider>);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();

    assert!((snapshot.steps - 0.0).abs() < f64::EPSILON);
    assert!((snapshot.sleep_minutes - 450.0).abs() < f64::EPSILON);
    assert!((snapshot.heart_rate_bpm - 72.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn store_unavailability_aborts_the_day() {
    init_test_logging();
    let provider = Arc::new(provider_with_full_day(test_date()));
    provider.set_available(false);
    let aggregator =
        DailyAggregator::new(Arc::clone(&provider) as Arc<dyn HealthDataProvider>);

    let err = aggregator.aggregate(test_date()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable { .. }));
}

#[tokio::test]
async fn weight_rounds_to_one_decimal_and_distance_to_two() {
    init_test_logging();
    let day = test_day();
    let provider = Arc::new(SyntheticHealthProvider::with_records(vec![
        weight_record(at(&day, 7, 0), 68.4449),
        common::distance_record(at(&day, 8, 0), at(&day, 9, 0), 1234.5),
    ]));
    let aggregator = DailyAggregator::new(provider);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();
    assert!((snapshot.weight_kg - 68.4).abs() < f64::EPSILON);
    assert!((snapshot.distance_km - 1.23).abs() < f64::EPSILON);
}

#[tokio::test]
async fn sample_metrics_keep_independent_latest_cursors() {
    init_test_logging();
    let day = test_day();
    // Heart rate's newest sample is later in the day than oxygen's; the
    // oxygen reading must still be picked up, not skipped because another
    // metric already saw a newer timestamp.
    let provider = Arc::new(SyntheticHealthProvider::with_records(vec![
        series_record(
            RecordType::HeartRate,
            at(&day, 8, 0),
            at(&day, 21, 0),
            vec![(at(&day, 21, 0), 70.0)],
        ),
        series_record(
            RecordType::OxygenSaturation,
            at(&day, 9, 0),
            at(&day, 9, 30),
            vec![(at(&day, 9, 0), 96.8)],
        ),
    ]));
    let aggregator = DailyAggregator::new(provider);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();
    assert!((snapshot.heart_rate_bpm - 70.0).abs() < f64::EPSILON);
    assert!((snapshot.oxygen_saturation_pct - 96.8).abs() < f64::EPSILON);
}

#[tokio::test]
async fn records_outside_the_day_window_are_excluded() {
    init_test_logging();
    let day = test_day();
    let next_day_start = day.end + chrono::Duration::milliseconds(1);
    let provider = Arc::new(SyntheticHealthProvider::with_records(vec![
        common::count_record(
            next_day_start + chrono::Duration::hours(1),
            next_day_start + chrono::Duration::hours(2),
            9999,
        ),
        common::count_record(at(&day, 10, 0), at(&day, 11, 0), 1500),
    ]));
    let aggregator = DailyAggregator::new(provider);

    let snapshot = aggregator.aggregate(test_date()).await.unwrap();
    assert!((snapshot.steps - 1500.0).abs() < f64::EPSILON);
}

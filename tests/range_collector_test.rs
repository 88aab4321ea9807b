// ABOUTME: Integration tests for the trailing-day range collector
// ABOUTME: Validates ordering, permission gating, and fatal-error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{init_test_logging, test_date};
use std::sync::Arc;
use vitalsync::aggregator::RangeCollector;
use vitalsync::errors::AppError;
use vitalsync::models::RecordType;
use vitalsync::permissions::{InMemoryPermissionGate, Scope};
use vitalsync::providers::synthetic::SyntheticHealthProvider;

fn collector_with(
    provider: Arc<SyntheticHealthProvider>,
    gate: Arc<InMemoryPermissionGate>,
) -> RangeCollector {
    RangeCollector::new(provider, gate)
}

#[tokio::test]
async fn collects_one_snapshot_per_trailing_day_descending() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::with_records(
        SyntheticHealthProvider::generate_demo_records(5, test_date()),
    ));
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, gate);

    let collection = collector.collect_from(5, test_date()).await.unwrap();

    assert_eq!(collection.len(), 5);
    for (i, snapshot) in collection.iter().enumerate() {
        let expected = test_date() - Duration::days(i64::try_from(i).unwrap());
        assert_eq!(snapshot.date, expected);
    }
}

#[tokio::test]
async fn latest_is_the_most_recent_day() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::with_records(
        SyntheticHealthProvider::generate_demo_records(3, test_date()),
    ));
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, gate);

    let collection = collector.collect_from(3, test_date()).await.unwrap();
    assert_eq!(collection.latest().unwrap().date, test_date());
}

#[tokio::test]
async fn days_without_records_are_empty_snapshots_not_errors() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::new());
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, gate);

    let collection = collector.collect_from(3, test_date()).await.unwrap();
    assert_eq!(collection.len(), 3);
    assert!(collection.iter().all(vitalsync::models::DailySnapshot::is_empty));
}

#[tokio::test]
async fn zero_days_is_invalid_input() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::new());
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, gate);

    let err = collector.collect_from(0, test_date()).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn missing_permission_blocks_before_any_provider_call() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::with_records(
        SyntheticHealthProvider::generate_demo_records(2, test_date()),
    ));
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted_except(&[
        Scope::read(RecordType::HeartRate),
    ]));
    let collector = collector_with(Arc::clone(&provider), gate);

    let err = collector.collect_from(2, test_date()).await.unwrap_err();

    assert!(err.is_permission_missing());
    match err {
        AppError::PermissionMissing { missing } => {
            assert_eq!(missing, vec![Scope::read(RecordType::HeartRate)]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(provider.read_call_count(), 0);
}

#[tokio::test]
async fn nothing_granted_reports_every_scope_missing() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::new());
    let gate = Arc::new(InMemoryPermissionGate::new());
    let collector = collector_with(Arc::clone(&provider), gate);

    let err = collector.collect_from(1, test_date()).await.unwrap_err();
    match err {
        AppError::PermissionMissing { missing } => {
            assert_eq!(missing.len(), RecordType::ALL.len());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(provider.read_call_count(), 0);
}

#[tokio::test]
async fn unavailable_store_aborts_without_partial_results() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::with_records(
        SyntheticHealthProvider::generate_demo_records(3, test_date()),
    ));
    provider.set_available(false);
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, gate);

    let err = collector.collect_from(3, test_date()).await.unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));
}

#[tokio::test]
async fn revoked_scopes_block_a_previously_working_collector() {
    init_test_logging();
    let provider = Arc::new(SyntheticHealthProvider::new());
    let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
    let collector = collector_with(provider, Arc::clone(&gate));

    assert!(collector.collect_from(1, test_date()).await.is_ok());

    use vitalsync::permissions::PermissionGate;
    gate.revoke().await;
    let err = collector.collect_from(1, test_date()).await.unwrap_err();
    assert!(err.is_permission_missing());
}

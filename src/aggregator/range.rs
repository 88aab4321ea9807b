// ABOUTME: Trailing-day range collection with permission gating
// ABOUTME: Iterates N local calendar days, most-recent first, into one collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Range collector.
//!
//! Collects `days` trailing local calendar days into a [`DailyCollection`],
//! most-recent first. The permission gate is consulted before any provider
//! call: a missing scope fails the fetch with a distinct error kind so the
//! caller can route to the grant flow. The day loop is a sequential
//! pipeline; each day's snapshot is an independent local result joined at
//! the end, so the loop could be fanned out without changing the output
//! contract (the collection is sorted by date, descending, regardless of
//! completion order).

use crate::aggregator::daily::DailyAggregator;
use crate::errors::{AppError, AppResult};
use crate::models::DailyCollection;
use crate::permissions::{missing_scopes, PermissionGate};
use crate::providers::core::HealthDataProvider;
use crate::providers::errors::ProviderError;
use chrono::{Duration, Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info};

/// Collects a trailing window of daily snapshots behind the permission gate
pub struct RangeCollector {
    provider: Arc<dyn HealthDataProvider>,
    gate: Arc<dyn PermissionGate>,
    aggregator: DailyAggregator,
}

impl RangeCollector {
    /// Create a collector over a provider and permission gate
    #[must_use]
    pub fn new(provider: Arc<dyn HealthDataProvider>, gate: Arc<dyn PermissionGate>) -> Self {
        let aggregator = DailyAggregator::new(Arc::clone(&provider));
        Self {
            provider,
            gate,
            aggregator,
        }
    }

    /// Collect the trailing `days` days ending today (local calendar)
    ///
    /// # Errors
    ///
    /// See [`collect_from`](Self::collect_from).
    pub async fn collect(&self, days: u32) -> AppResult<DailyCollection> {
        self.collect_from(days, Local::now().date_naive()).await
    }

    /// Collect `days` days ending at `today` (most-recent first)
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] when `days` is zero
    /// - [`AppError::PermissionMissing`] when any required scope is not
    ///   granted; no provider call is made in this case
    /// - [`AppError::Provider`] when the store is unavailable; no partial
    ///   collection is returned
    pub async fn collect_from(&self, days: u32, today: NaiveDate) -> AppResult<DailyCollection> {
        if days == 0 {
            return Err(AppError::invalid_input("day count must be at least 1"));
        }

        let granted = self.gate.granted_scopes().await;
        let missing = missing_scopes(&granted);
        if !missing.is_empty() {
            return Err(AppError::PermissionMissing { missing });
        }

        if !self.provider.is_available().await {
            return Err(AppError::Provider(ProviderError::Unavailable {
                provider: self.provider.name().to_owned(),
                details: "store reported unavailable before collection".to_owned(),
            }));
        }

        info!(days, newest = %today, "collecting trailing daily snapshots");

        let mut snapshots = Vec::with_capacity(days as usize);
        for i in 0..days {
            let date = today - Duration::days(i64::from(i));
            let snapshot = self.aggregator.aggregate(date).await?;
            debug!(date = %date, empty = snapshot.is_empty(), "day collected");
            snapshots.push(snapshot);
        }

        let collection = DailyCollection::new(snapshots);
        info!(
            days = collection.len(),
            fetched_at = %collection.fetched_at,
            "collection complete"
        );
        Ok(collection)
    }
}

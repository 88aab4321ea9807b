// ABOUTME: Per-day aggregation of all eleven metrics into one daily snapshot
// ABOUTME: Isolates per-metric read failures so one broken metric never sinks the day
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily aggregator.
//!
//! Invokes every metric reducer independently for one target date and
//! assembles the normalized snapshot. A read failure scoped to one record
//! type is logged and that metric defaults to zero; store-wide
//! unavailability propagates and aborts the fetch. The aggregator holds no
//! state and is safe to call repeatedly and concurrently for different
//! dates.

use crate::aggregator::reducers::{metric_table, reduce};
use crate::models::{round_to, DailySnapshot};
use crate::providers::core::{HealthDataProvider, TimeRange};
use crate::providers::errors::ProviderError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// Aggregates one calendar day of raw records into a [`DailySnapshot`]
pub struct DailyAggregator {
    provider: Arc<dyn HealthDataProvider>,
}

impl DailyAggregator {
    /// Create an aggregator over a provider
    #[must_use]
    pub fn new(provider: Arc<dyn HealthDataProvider>) -> Self {
        Self { provider }
    }

    /// Build the snapshot for one local calendar date
    ///
    /// Reads each record type once for the day's window, reduces it per
    /// the metric table, scales and rounds, and emits the snapshot even
    /// when individual metrics fail.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when the store as a whole
    /// cannot serve reads; per-metric failures are recovered and default
    /// the metric to zero.
    pub async fn aggregate(&self, date: NaiveDate) -> Result<DailySnapshot, ProviderError> {
        let range = TimeRange::local_day(date);
        let mut snapshot = DailySnapshot::empty(date);

        for spec in metric_table() {
            match self.provider.read_records(spec.record_type, &range).await {
                Ok(records) => {
                    let raw = reduce(spec.rule, &records, &range);
                    snapshot.set(spec.metric, round_to(raw * spec.scale, spec.decimals));
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(
                        metric = %spec.metric,
                        date = %date,
                        error = %err,
                        "metric read failed; defaulting to 0"
                    );
                }
            }
        }

        debug!(
            date = %date,
            empty = snapshot.is_empty(),
            steps = snapshot.steps,
            sleep_minutes = snapshot.sleep_minutes,
            "daily snapshot assembled"
        );

        Ok(snapshot)
    }
}

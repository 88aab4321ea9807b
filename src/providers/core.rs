// ABOUTME: Core provider trait for unified health record access
// ABOUTME: Defines the read contract and local-day time-window computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core provider trait and time-range types.
//!
//! `HealthDataProvider` is the unified read interface over the device-local
//! health store. Providers return provider-native timestamps; all
//! interpretation (windowing, reduction, rounding) happens in the
//! aggregator. Implementations must be `Send + Sync` for concurrent access
//! across async tasks.

use crate::models::{RawRecord, RecordType};
use crate::providers::errors::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Inclusive time window for a record query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Window start (inclusive)
    pub start: DateTime<Utc>,
    /// Window end (inclusive)
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// The full local calendar day `[00:00:00.000, 23:59:59.999]` for a date
    ///
    /// The window is computed in the device's local time zone and converted
    /// to UTC for provider queries, matching how the health store bounds
    /// daily data. Skipped or ambiguous local times (DST transitions) fall
    /// back to the earliest valid instant, or to the UTC reading of the
    /// naive time when the local time does not exist at all.
    #[must_use]
    pub fn local_day(date: NaiveDate) -> Self {
        Self {
            start: local_instant(date, 0, 0, 0, 0),
            end: local_instant(date, 23, 59, 59, 999),
        }
    }

    /// Whether a timestamp lies within the window
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Resolve a local wall-clock time on `date` to a UTC instant
fn local_instant(date: NaiveDate, hour: u32, min: u32, sec: u32, milli: u32) -> DateTime<Utc> {
    date.and_hms_milli_opt(hour, min, sec, milli)
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map_or_else(
            || {
                // Local time skipped by a DST jump: interpret naively as UTC
                // so the window stays well-formed.
                let naive = date
                    .and_hms_milli_opt(hour, min, sec, milli)
                    .unwrap_or_default();
                Utc.from_utc_datetime(&naive)
            },
            |local| local.with_timezone(&Utc),
        )
}

/// Unified read interface over a device-local health store
///
/// The engine calls `read_records` once per record type per day. A
/// provider that cannot serve reads at all reports `is_available() ==
/// false` (or returns [`ProviderError::Unavailable`]), which aborts the
/// whole collection fetch; a failure scoped to one record type is
/// recovered by the aggregator and defaults that metric to zero.
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Provider name (e.g., "health-connect", "synthetic")
    fn name(&self) -> &'static str;

    /// Whether the underlying data store can currently serve reads
    async fn is_available(&self) -> bool;

    /// Read all records of one type whose validity falls within the window
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when the store as a whole
    /// cannot serve reads, or [`ProviderError::RecordRead`] for a failure
    /// scoped to this record type.
    async fn read_records(
        &self,
        record_type: RecordType,
        range: &TimeRange,
    ) -> Result<Vec<RawRecord>, ProviderError>;
}

// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides record builders, providers, and permission gate helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]

//! Shared test utilities for `vitalsync`
//!
//! Common record builders and provider setup helpers to reduce duplication
//! across integration tests.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::sync::Once;
use vitalsync::models::{RawRecord, RecordPayload, RecordType, Sample};
use vitalsync::providers::core::TimeRange;
use vitalsync::providers::synthetic::SyntheticHealthProvider;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// A fixed test date well away from any DST transition
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// The local-day window for the fixed test date
pub fn test_day() -> TimeRange {
    TimeRange::local_day(test_date())
}

/// An instant `hours` (and `minutes`) into the given day window
pub fn at(range: &TimeRange, hours: i64, minutes: i64) -> DateTime<Utc> {
    range.start + Duration::hours(hours) + Duration::minutes(minutes)
}

pub fn interval_record(
    record_type: RecordType,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> RawRecord {
    RawRecord {
        record_type,
        start_time: start,
        end_time: end,
        payload: RecordPayload::Interval,
    }
}

pub fn count_record(start: DateTime<Utc>, end: DateTime<Utc>, count: u64) -> RawRecord {
    RawRecord {
        record_type: RecordType::Steps,
        start_time: start,
        end_time: end,
        payload: RecordPayload::Count { count },
    }
}

pub fn distance_record(start: DateTime<Utc>, end: DateTime<Utc>, meters: f64) -> RawRecord {
    RawRecord {
        record_type: RecordType::Distance,
        start_time: start,
        end_time: end,
        payload: RecordPayload::Distance { meters },
    }
}

pub fn energy_record(
    record_type: RecordType,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    kilocalories: f64,
) -> RawRecord {
    RawRecord {
        record_type,
        start_time: start,
        end_time: end,
        payload: RecordPayload::Energy { kilocalories },
    }
}

pub fn weight_record(time: DateTime<Utc>, kilograms: f64) -> RawRecord {
    RawRecord {
        record_type: RecordType::Weight,
        start_time: time,
        end_time: time,
        payload: RecordPayload::Mass { kilograms },
    }
}

pub fn height_record(time: DateTime<Utc>, meters: f64) -> RawRecord {
    RawRecord {
        record_type: RecordType::Height,
        start_time: time,
        end_time: time,
        payload: RecordPayload::Length { meters },
    }
}

pub fn resting_hr_record(time: DateTime<Utc>, bpm: f64) -> RawRecord {
    RawRecord {
        record_type: RecordType::RestingHeartRate,
        start_time: time,
        end_time: time,
        payload: RecordPayload::BeatsPerMinute { bpm },
    }
}

pub fn series_record(
    record_type: RecordType,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    samples: Vec<(DateTime<Utc>, f64)>,
) -> RawRecord {
    RawRecord {
        record_type,
        start_time: start,
        end_time: end,
        payload: RecordPayload::Samples {
            samples: samples
                .into_iter()
                .map(|(time, value)| Sample { time, value })
                .collect(),
        },
    }
}

/// A provider pre-loaded with a realistic single day of records
pub fn provider_with_full_day(date: NaiveDate) -> SyntheticHealthProvider {
    let range = TimeRange::local_day(date);
    SyntheticHealthProvider::with_records(full_day_records(&range))
}

/// A realistic single day of records inside the given window
pub fn full_day_records(range: &TimeRange) -> Vec<RawRecord> {
    vec![
        interval_record(RecordType::SleepSession, at(range, 0, 0), at(range, 7, 30)),
        count_record(at(range, 8, 0), at(range, 12, 0), 4000),
        count_record(at(range, 13, 0), at(range, 20, 0), 4345),
        distance_record(at(range, 8, 0), at(range, 20, 0), 6120.0),
        energy_record(
            RecordType::TotalCaloriesBurned,
            at(range, 0, 0),
            at(range, 23, 0),
            2105.0,
        ),
        energy_record(
            RecordType::ActiveCaloriesBurned,
            at(range, 7, 0),
            at(range, 21, 0),
            488.0,
        ),
        series_record(
            RecordType::HeartRate,
            at(range, 8, 0),
            at(range, 20, 0),
            vec![
                (at(range, 8, 0), 64.0),
                (at(range, 14, 0), 91.0),
                (at(range, 20, 0), 72.0),
            ],
        ),
        series_record(
            RecordType::OxygenSaturation,
            at(range, 9, 0),
            at(range, 19, 0),
            vec![(at(range, 9, 0), 96.4), (at(range, 19, 0), 97.8)],
        ),
        series_record(
            RecordType::StepsCadence,
            at(range, 17, 0),
            at(range, 18, 0),
            vec![(at(range, 17, 30), 108.0)],
        ),
        resting_hr_record(at(range, 6, 0), 57.0),
        weight_record(at(range, 7, 0), 71.25),
        height_record(at(range, 7, 0), 1.78),
    ]
}

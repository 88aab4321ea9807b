// ABOUTME: Metric table and pure reduction rules for raw health records
// ABOUTME: Sum-over-interval, latest-by-record, and latest-by-sample reducers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric reducers.
//!
//! A reducer converts the raw records of one record type, restricted to one
//! calendar day, into a single scalar. Three rules cover all eleven
//! metrics:
//!
//! - **Sum**: cumulative metrics (sleep minutes, distance, steps,
//!   calories) sum across all qualifying records.
//! - **Latest-by-record**: point metrics (weight, height, resting heart
//!   rate) take the most recent record's value; records are ordered by
//!   start time descending rather than trusting provider order.
//! - **Latest-by-sample**: series metrics (heart rate, oxygen saturation,
//!   cadence) flatten nested samples and select the one with the maximum
//!   timestamp strictly within the day's window. Each metric keeps its own
//!   latest-timestamp cursor; there is no cross-metric coupling.
//!
//! Zero qualifying records reduce to 0; that is not an error.

use crate::models::{Metric, RawRecord, RecordPayload, RecordType};
use crate::providers::core::TimeRange;

/// Reduction rule for one metric class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceRule {
    /// Sum of `(end - start)` in minutes per record
    SumIntervalMinutes,
    /// Sum of the scalar payload across records
    SumScalar,
    /// Scalar payload of the most recent record (by start time)
    LatestRecordScalar,
    /// Value of the flattened sample with the maximum in-window timestamp
    LatestSampleValue,
}

/// One row of the metric table: how a metric is read, reduced, and stored
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    /// The normalized metric produced
    pub metric: Metric,
    /// Record type read from the provider
    pub record_type: RecordType,
    /// Reduction rule applied to the day's records
    pub rule: ReduceRule,
    /// Unit scale applied after reduction (meters → kilometers, etc.)
    pub scale: f64,
    /// Decimal places kept when storing into the snapshot
    pub decimals: u32,
}

/// The metric table: one row per normalized daily metric
///
/// Adding a metric means adding a row here; the aggregator iterates this
/// table and has no per-metric branching of its own.
#[must_use]
pub const fn metric_table() -> &'static [MetricSpec; 11] {
    const TABLE: [MetricSpec; 11] = [
        MetricSpec {
            metric: Metric::SleepMinutes,
            record_type: RecordType::SleepSession,
            rule: ReduceRule::SumIntervalMinutes,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::WeightKg,
            record_type: RecordType::Weight,
            rule: ReduceRule::LatestRecordScalar,
            scale: 1.0,
            decimals: 1,
        },
        MetricSpec {
            metric: Metric::HeightM,
            record_type: RecordType::Height,
            rule: ReduceRule::LatestRecordScalar,
            scale: 1.0,
            decimals: 2,
        },
        MetricSpec {
            metric: Metric::DistanceKm,
            record_type: RecordType::Distance,
            rule: ReduceRule::SumScalar,
            scale: 1e-3,
            decimals: 2,
        },
        MetricSpec {
            metric: Metric::Steps,
            record_type: RecordType::Steps,
            rule: ReduceRule::SumScalar,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::StepsCadence,
            record_type: RecordType::StepsCadence,
            rule: ReduceRule::LatestSampleValue,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::TotalCaloriesKcal,
            record_type: RecordType::TotalCaloriesBurned,
            rule: ReduceRule::SumScalar,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::ActiveCaloriesKcal,
            record_type: RecordType::ActiveCaloriesBurned,
            rule: ReduceRule::SumScalar,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::OxygenSaturationPct,
            record_type: RecordType::OxygenSaturation,
            rule: ReduceRule::LatestSampleValue,
            scale: 1.0,
            decimals: 1,
        },
        MetricSpec {
            metric: Metric::HeartRateBpm,
            record_type: RecordType::HeartRate,
            rule: ReduceRule::LatestSampleValue,
            scale: 1.0,
            decimals: 0,
        },
        MetricSpec {
            metric: Metric::RestingHeartRateBpm,
            record_type: RecordType::RestingHeartRate,
            rule: ReduceRule::LatestRecordScalar,
            scale: 1.0,
            decimals: 0,
        },
    ];
    &TABLE
}

/// Reduce one day's records to a raw (unscaled, unrounded) scalar
///
/// `range` is the day's window; it re-filters nested samples because a
/// record overlapping the window can still carry samples outside it.
#[must_use]
pub fn reduce(rule: ReduceRule, records: &[RawRecord], range: &TimeRange) -> f64 {
    match rule {
        ReduceRule::SumIntervalMinutes => records
            .iter()
            .map(|r| (r.end_time - r.start_time).num_milliseconds() as f64 / 60_000.0)
            .sum(),
        ReduceRule::SumScalar => records
            .iter()
            .filter_map(|r| r.payload.scalar())
            .sum(),
        ReduceRule::LatestRecordScalar => records
            .iter()
            .max_by_key(|r| r.start_time)
            .and_then(|r| r.payload.scalar())
            .unwrap_or(0.0),
        ReduceRule::LatestSampleValue => latest_sample_value(records, range),
    }
}

/// Flatten in-window samples across records and take the newest one
fn latest_sample_value(records: &[RawRecord], range: &TimeRange) -> f64 {
    let mut latest: Option<(chrono::DateTime<chrono::Utc>, f64)> = None;

    for record in records {
        if let RecordPayload::Samples { samples } = &record.payload {
            for sample in samples {
                if !range.contains(sample.time) {
                    continue;
                }
                match latest {
                    Some((time, _)) if sample.time <= time => {}
                    _ => latest = Some((sample.time, sample.value)),
                }
            }
        }
    }

    latest.map_or(0.0, |(_, value)| value)
}

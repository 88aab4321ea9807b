// ABOUTME: Core data models for health records, daily snapshots, and upload outcomes
// ABOUTME: Defines the normalized schema shared by providers, aggregator, and uploader
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared domain models for the VitalSync engine.
//!
//! Raw records mirror the shapes the device-local health store returns
//! (interval sessions, point samples, cumulative counters, nested sample
//! series). `DailySnapshot` is the normalized unit everything downstream
//! consumes: eleven scalars for one calendar date, with absent metrics
//! defaulting to zero.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record types readable from the device-local health store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Sleep session with a validity interval
    SleepSession,
    /// Body weight point record
    Weight,
    /// Body height point record
    Height,
    /// Distance covered over an interval
    Distance,
    /// Step count over an interval
    Steps,
    /// Step cadence sample series
    StepsCadence,
    /// Total energy burned over an interval
    TotalCaloriesBurned,
    /// Active energy burned over an interval
    ActiveCaloriesBurned,
    /// Blood oxygen saturation sample series
    OxygenSaturation,
    /// Heart rate sample series
    HeartRate,
    /// Resting heart rate point record
    RestingHeartRate,
}

impl RecordType {
    /// All record types the engine reads, in aggregation order
    pub const ALL: [Self; 11] = [
        Self::SleepSession,
        Self::Weight,
        Self::Height,
        Self::Distance,
        Self::Steps,
        Self::StepsCadence,
        Self::TotalCaloriesBurned,
        Self::ActiveCaloriesBurned,
        Self::OxygenSaturation,
        Self::HeartRate,
        Self::RestingHeartRate,
    ];

    /// Provider-native record type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SleepSession => "SleepSession",
            Self::Weight => "Weight",
            Self::Height => "Height",
            Self::Distance => "Distance",
            Self::Steps => "Steps",
            Self::StepsCadence => "StepsCadence",
            Self::TotalCaloriesBurned => "TotalCaloriesBurned",
            Self::ActiveCaloriesBurned => "ActiveCaloriesBurned",
            Self::OxygenSaturation => "OxygenSaturation",
            Self::HeartRate => "HeartRate",
            Self::RestingHeartRate => "RestingHeartRate",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped measurement inside a sample-series record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the sample was taken (provider-native timestamp)
    pub time: DateTime<Utc>,
    /// Measured value (bpm, steps/min, or percent depending on record type)
    pub value: f64,
}

/// Type-specific value payload of a raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordPayload {
    /// Interval-only record; the value is derived from the validity interval
    /// (sleep duration in minutes)
    Interval,
    /// Mass measurement in kilograms (weight)
    Mass {
        /// Kilograms
        kilograms: f64,
    },
    /// Length measurement in meters (height)
    Length {
        /// Meters
        meters: f64,
    },
    /// Distance covered in meters
    Distance {
        /// Meters
        meters: f64,
    },
    /// Discrete count (steps)
    Count {
        /// Number of units counted over the interval
        count: u64,
    },
    /// Energy in kilocalories (total or active calories)
    Energy {
        /// Kilocalories
        kilocalories: f64,
    },
    /// Record-level rate in beats per minute (resting heart rate average)
    BeatsPerMinute {
        /// Beats per minute
        bpm: f64,
    },
    /// Nested per-sample series (heart rate, oxygen saturation, cadence)
    Samples {
        /// Individually timestamped samples
        samples: Vec<Sample>,
    },
}

impl RecordPayload {
    /// Scalar value carried by non-series payloads, if any
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Interval | Self::Samples { .. } => None,
            Self::Mass { kilograms } => Some(*kilograms),
            Self::Length { meters } | Self::Distance { meters } => Some(*meters),
            Self::Count { count } => Some(*count as f64),
            Self::Energy { kilocalories } => Some(*kilocalories),
            Self::BeatsPerMinute { bpm } => Some(*bpm),
        }
    }
}

/// A raw record as returned by the device-local health store
///
/// Immutable once read. Point records (weight, height) carry identical
/// start and end times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Record type this payload belongs to
    pub record_type: RecordType,
    /// Start of the validity interval
    pub start_time: DateTime<Utc>,
    /// End of the validity interval
    pub end_time: DateTime<Utc>,
    /// Type-specific value payload
    pub payload: RecordPayload,
}

/// The eleven normalized daily metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Total sleep duration in minutes
    SleepMinutes,
    /// Latest body weight in kilograms
    WeightKg,
    /// Latest body height in meters
    HeightM,
    /// Total distance in kilometers
    DistanceKm,
    /// Total step count
    Steps,
    /// Latest step cadence in steps/minute
    StepsCadence,
    /// Total calories burned in kilocalories
    TotalCaloriesKcal,
    /// Active calories burned in kilocalories
    ActiveCaloriesKcal,
    /// Latest blood oxygen saturation in percent
    OxygenSaturationPct,
    /// Latest heart rate in beats per minute
    HeartRateBpm,
    /// Latest resting heart rate in beats per minute
    RestingHeartRateBpm,
}

impl Metric {
    /// Snake-case metric name for structured logging
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SleepMinutes => "sleep_minutes",
            Self::WeightKg => "weight_kg",
            Self::HeightM => "height_m",
            Self::DistanceKm => "distance_km",
            Self::Steps => "steps",
            Self::StepsCadence => "steps_cadence",
            Self::TotalCaloriesKcal => "total_calories_kcal",
            Self::ActiveCaloriesKcal => "active_calories_kcal",
            Self::OxygenSaturationPct => "oxygen_saturation_pct",
            Self::HeartRateBpm => "heart_rate_bpm",
            Self::RestingHeartRateBpm => "resting_heart_rate_bpm",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized daily health summary for one calendar date
///
/// Every metric defaults to 0 when no record exists for that date; absence
/// is not an error. All values are rounded to a fixed, metric-specific
/// precision before storage so repeated aggregation of the same input is
/// bit-identical. Snapshots are superseded (never mutated) on refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Calendar date (local time zone) this snapshot covers
    pub date: NaiveDate,
    /// Total sleep duration in minutes
    pub sleep_minutes: f64,
    /// Latest body weight in kilograms (1 decimal)
    pub weight_kg: f64,
    /// Latest body height in meters (2 decimals)
    pub height_m: f64,
    /// Total distance in kilometers (2 decimals)
    pub distance_km: f64,
    /// Total step count
    pub steps: f64,
    /// Latest step cadence in steps/minute
    pub steps_cadence: f64,
    /// Total calories burned in kilocalories
    pub total_calories_kcal: f64,
    /// Active calories burned in kilocalories
    pub active_calories_kcal: f64,
    /// Latest blood oxygen saturation in percent (1 decimal)
    pub oxygen_saturation_pct: f64,
    /// Latest heart rate in beats per minute
    pub heart_rate_bpm: f64,
    /// Latest resting heart rate in beats per minute
    pub resting_heart_rate_bpm: f64,
}

impl DailySnapshot {
    /// Create an all-zero snapshot for the given date
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sleep_minutes: 0.0,
            weight_kg: 0.0,
            height_m: 0.0,
            distance_km: 0.0,
            steps: 0.0,
            steps_cadence: 0.0,
            total_calories_kcal: 0.0,
            active_calories_kcal: 0.0,
            oxygen_saturation_pct: 0.0,
            heart_rate_bpm: 0.0,
            resting_heart_rate_bpm: 0.0,
        }
    }

    /// Read one metric field
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SleepMinutes => self.sleep_minutes,
            Metric::WeightKg => self.weight_kg,
            Metric::HeightM => self.height_m,
            Metric::DistanceKm => self.distance_km,
            Metric::Steps => self.steps,
            Metric::StepsCadence => self.steps_cadence,
            Metric::TotalCaloriesKcal => self.total_calories_kcal,
            Metric::ActiveCaloriesKcal => self.active_calories_kcal,
            Metric::OxygenSaturationPct => self.oxygen_saturation_pct,
            Metric::HeartRateBpm => self.heart_rate_bpm,
            Metric::RestingHeartRateBpm => self.resting_heart_rate_bpm,
        }
    }

    /// Write one metric field
    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::SleepMinutes => self.sleep_minutes = value,
            Metric::WeightKg => self.weight_kg = value,
            Metric::HeightM => self.height_m = value,
            Metric::DistanceKm => self.distance_km = value,
            Metric::Steps => self.steps = value,
            Metric::StepsCadence => self.steps_cadence = value,
            Metric::TotalCaloriesKcal => self.total_calories_kcal = value,
            Metric::ActiveCaloriesKcal => self.active_calories_kcal = value,
            Metric::OxygenSaturationPct => self.oxygen_saturation_pct = value,
            Metric::HeartRateBpm => self.heart_rate_bpm = value,
            Metric::RestingHeartRateBpm => self.resting_heart_rate_bpm = value,
        }
    }

    /// Whether every metric is zero (no data recorded for this date)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Metric::ALL.iter().all(|m| self.get(*m) == 0.0)
    }

    /// Date formatted as `YYYY-MM-DD` for the wire format
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl Metric {
    /// All metrics in aggregation order
    pub const ALL: [Self; 11] = [
        Self::SleepMinutes,
        Self::WeightKg,
        Self::HeightM,
        Self::DistanceKm,
        Self::Steps,
        Self::StepsCadence,
        Self::TotalCaloriesKcal,
        Self::ActiveCaloriesKcal,
        Self::OxygenSaturationPct,
        Self::HeartRateBpm,
        Self::RestingHeartRateBpm,
    ];
}

/// Ordered sequence of daily snapshots, most-recent date first
///
/// Owned by the range collector; replaced wholesale on each fetch. The
/// first element doubles as the "current display" snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCollection {
    /// Snapshots ordered strictly descending by date
    pub snapshots: Vec<DailySnapshot>,
    /// When this collection was fetched
    pub fetched_at: DateTime<Utc>,
}

impl DailyCollection {
    /// Build a collection from per-day snapshots
    ///
    /// Snapshots are sorted descending by date so the ordering is
    /// deterministic regardless of completion order.
    #[must_use]
    pub fn new(mut snapshots: Vec<DailySnapshot>) -> Self {
        snapshots.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            snapshots,
            fetched_at: Utc::now(),
        }
    }

    /// The most recent day's snapshot (the "current display" projection)
    #[must_use]
    pub fn latest(&self) -> Option<&DailySnapshot> {
        self.snapshots.first()
    }

    /// Number of days in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the collection holds no snapshots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate snapshots most-recent first
    pub fn iter(&self) -> std::slice::Iter<'_, DailySnapshot> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a DailyCollection {
    type Item = &'a DailySnapshot;
    type IntoIter = std::slice::Iter<'a, DailySnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Outcome of uploading one day's snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    /// Date the uploaded snapshot covers (`YYYY-MM-DD`)
    pub date: String,
    /// Whether the server acknowledged the upload with a 2xx response
    pub ok: bool,
    /// Failure detail when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadOutcome {
    /// Successful outcome for a date
    #[must_use]
    pub const fn success(date: String) -> Self {
        Self {
            date,
            ok: true,
            error: None,
        }
    }

    /// Failed outcome for a date with detail
    #[must_use]
    pub const fn failure(date: String, error: String) -> Self {
        Self {
            date,
            ok: false,
            error: Some(error),
        }
    }
}

/// Overall classification of a batch upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Every attempted day succeeded
    Complete,
    /// Some days succeeded, some failed
    Partial,
    /// No day succeeded
    TotalFailure,
}

/// Aggregate per-day upload accounting for one batch
///
/// Derived strictly from the collection at upload time; discarded after
/// the caller is notified. Invariant: `succeeded + failed == attempted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTally {
    /// Number of days attempted (always the collection length)
    pub attempted: usize,
    /// Number of days acknowledged by the server
    pub succeeded: usize,
    /// Number of days that failed
    pub failed: usize,
    /// Per-day outcomes, keyed by date, in attempt order
    pub outcomes: Vec<UploadOutcome>,
}

impl UploadTally {
    /// Build a tally from per-day outcomes
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<UploadOutcome>) -> Self {
        let attempted = outcomes.len();
        let succeeded = outcomes.iter().filter(|o| o.ok).count();
        Self {
            attempted,
            succeeded,
            failed: attempted - succeeded,
            outcomes,
        }
    }

    /// Classify the batch outcome
    #[must_use]
    pub const fn status(&self) -> UploadStatus {
        if self.succeeded == self.attempted {
            UploadStatus::Complete
        } else if self.succeeded == 0 {
            UploadStatus::TotalFailure
        } else {
            UploadStatus::Partial
        }
    }
}

/// Round a value to a fixed number of decimal places
///
/// The rounding policy makes aggregation reproducible: weight and oxygen
/// saturation keep 1 decimal, height and distance keep 2, everything else
/// rounds to an integer.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

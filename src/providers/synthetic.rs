// ABOUTME: In-memory synthetic health provider for development and testing
// ABOUTME: Supports record injection, failure injection, and read-call accounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Synthetic Health Provider
//!
//! An in-memory provider for development, testing, and demonstration.
//! Unlike a real device data store it requires no platform bindings and
//! supports:
//!
//! - Dynamic record injection
//! - Per-record-type failure injection
//! - A store-wide availability toggle
//! - A read-call counter (used to verify the permission gate blocks
//!   collection before any provider call)
//! - Deterministic demo data generation
//!
//! ## Thread Safety
//!
//! All data access is protected by `RwLock` for safe concurrent use.

use crate::models::{RawRecord, RecordPayload, RecordType, Sample};
use crate::providers::core::{HealthDataProvider, TimeRange};
use crate::providers::errors::ProviderError;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

const PROVIDER_NAME: &str = "synthetic";

/// Synthetic in-memory health data provider
pub struct SyntheticHealthProvider {
    /// Injected records, in insertion order
    records: RwLock<Vec<RawRecord>>,
    /// Record types whose reads are forced to fail
    failing_types: RwLock<HashSet<RecordType>>,
    /// Store-wide availability toggle
    available: AtomicBool,
    /// Number of `read_records` calls observed
    read_calls: AtomicUsize,
}

impl SyntheticHealthProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a provider pre-loaded with records
    #[must_use]
    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            failing_types: RwLock::new(HashSet::new()),
            available: AtomicBool::new(true),
            read_calls: AtomicUsize::new(0),
        }
    }

    /// Add a record dynamically
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal lock is
    /// poisoned.
    pub fn add_record(&self, record: RawRecord) -> Result<(), ProviderError> {
        self.records
            .write()
            .map_err(|_| poisoned("records"))?
            .push(record);
        Ok(())
    }

    /// Replace all records with a new set
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal lock is
    /// poisoned.
    pub fn set_records(&self, records: Vec<RawRecord>) -> Result<(), ProviderError> {
        *self.records.write().map_err(|_| poisoned("records"))? = records;
        Ok(())
    }

    /// Force reads of one record type to fail
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal lock is
    /// poisoned.
    pub fn fail_record_type(&self, record_type: RecordType) -> Result<(), ProviderError> {
        self.failing_types
            .write()
            .map_err(|_| poisoned("failing_types"))?
            .insert(record_type);
        Ok(())
    }

    /// Toggle store-wide availability
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `read_records` calls observed since creation
    #[must_use]
    pub fn read_call_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    /// Generate deterministic demo records for `days` trailing days
    ///
    /// Produces a plausible daily pattern (sleep session, steps, distance,
    /// calories, heart rate and oxygen series, cadence, periodic weight and
    /// height) without randomness, so repeated runs aggregate identically.
    #[must_use]
    pub fn generate_demo_records(days: u32, newest: NaiveDate) -> Vec<RawRecord> {
        let mut records = Vec::new();

        for i in 0..days {
            let date = newest - Duration::days(i64::from(i));
            let midnight = TimeRange::local_day(date).start;

            // Sleep: previous evening 23:00 to 06:30-07:15, varying by day
            let sleep_start = midnight - Duration::hours(1);
            let sleep_end = midnight + Duration::hours(6) + Duration::minutes(30 + i64::from(i % 3) * 15);
            records.push(RawRecord {
                record_type: RecordType::SleepSession,
                start_time: sleep_start,
                end_time: sleep_end,
                payload: RecordPayload::Interval,
            });

            // Steps split across morning and afternoon intervals
            let morning_steps = 3200 + u64::from(i % 5) * 250;
            let afternoon_steps = 4800 + u64::from(i % 7) * 300;
            records.push(RawRecord {
                record_type: RecordType::Steps,
                start_time: midnight + Duration::hours(8),
                end_time: midnight + Duration::hours(12),
                payload: RecordPayload::Count {
                    count: morning_steps,
                },
            });
            records.push(RawRecord {
                record_type: RecordType::Steps,
                start_time: midnight + Duration::hours(13),
                end_time: midnight + Duration::hours(20),
                payload: RecordPayload::Count {
                    count: afternoon_steps,
                },
            });

            // Distance in meters across the day
            records.push(RawRecord {
                record_type: RecordType::Distance,
                start_time: midnight + Duration::hours(8),
                end_time: midnight + Duration::hours(20),
                payload: RecordPayload::Distance {
                    meters: 4500.0 + f64::from(i % 4) * 650.0,
                },
            });

            // Calories
            records.push(RawRecord {
                record_type: RecordType::TotalCaloriesBurned,
                start_time: midnight,
                end_time: midnight + Duration::hours(24) - Duration::milliseconds(1),
                payload: RecordPayload::Energy {
                    kilocalories: 1950.0 + f64::from(i % 6) * 85.0,
                },
            });
            records.push(RawRecord {
                record_type: RecordType::ActiveCaloriesBurned,
                start_time: midnight + Duration::hours(7),
                end_time: midnight + Duration::hours(21),
                payload: RecordPayload::Energy {
                    kilocalories: 420.0 + f64::from(i % 6) * 40.0,
                },
            });

            // Heart rate samples through the day
            let hr_samples = (0..6)
                .map(|h| Sample {
                    time: midnight + Duration::hours(8 + h * 2),
                    value: 62.0 + f64::from((i + u32::try_from(h).unwrap_or(0)) % 9) * 4.0,
                })
                .collect();
            records.push(RawRecord {
                record_type: RecordType::HeartRate,
                start_time: midnight + Duration::hours(8),
                end_time: midnight + Duration::hours(20),
                payload: RecordPayload::Samples {
                    samples: hr_samples,
                },
            });

            // Oxygen saturation spot checks
            let oxygen_samples = vec![
                Sample {
                    time: midnight + Duration::hours(9),
                    value: 96.5 + f64::from(i % 3) * 0.5,
                },
                Sample {
                    time: midnight + Duration::hours(19),
                    value: 97.0 + f64::from(i % 2) * 0.8,
                },
            ];
            records.push(RawRecord {
                record_type: RecordType::OxygenSaturation,
                start_time: midnight + Duration::hours(9),
                end_time: midnight + Duration::hours(19),
                payload: RecordPayload::Samples {
                    samples: oxygen_samples,
                },
            });

            // Cadence during an afternoon walk
            records.push(RawRecord {
                record_type: RecordType::StepsCadence,
                start_time: midnight + Duration::hours(17),
                end_time: midnight + Duration::hours(18),
                payload: RecordPayload::Samples {
                    samples: vec![Sample {
                        time: midnight + Duration::hours(17) + Duration::minutes(30),
                        value: 104.0 + f64::from(i % 4) * 3.0,
                    }],
                },
            });

            // Resting heart rate
            records.push(RawRecord {
                record_type: RecordType::RestingHeartRate,
                start_time: midnight + Duration::hours(6),
                end_time: midnight + Duration::hours(6),
                payload: RecordPayload::BeatsPerMinute {
                    bpm: 56.0 + f64::from(i % 4),
                },
            });

            // Weight and height only every third day (point records)
            if i % 3 == 0 {
                records.push(RawRecord {
                    record_type: RecordType::Weight,
                    start_time: midnight + Duration::hours(7),
                    end_time: midnight + Duration::hours(7),
                    payload: RecordPayload::Mass {
                        kilograms: 71.3 - f64::from(i) * 0.05,
                    },
                });
                records.push(RawRecord {
                    record_type: RecordType::Height,
                    start_time: midnight + Duration::hours(7),
                    end_time: midnight + Duration::hours(7),
                    payload: RecordPayload::Length { meters: 1.78 },
                });
            }
        }

        records
    }
}

impl Default for SyntheticHealthProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(lock: &str) -> ProviderError {
    ProviderError::ConfigurationError {
        provider: PROVIDER_NAME.to_owned(),
        details: format!("RwLock poisoned: {lock} lock"),
    }
}

#[async_trait]
impl HealthDataProvider for SyntheticHealthProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn read_records(
        &self,
        record_type: RecordType,
        range: &TimeRange,
    ) -> Result<Vec<RawRecord>, ProviderError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);

        if !self.available.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable {
                provider: PROVIDER_NAME.to_owned(),
                details: "store marked unavailable".to_owned(),
            });
        }

        if self
            .failing_types
            .read()
            .map_err(|_| poisoned("failing_types"))?
            .contains(&record_type)
        {
            return Err(ProviderError::RecordRead {
                provider: PROVIDER_NAME.to_owned(),
                record_type,
                details: "injected read failure".to_owned(),
            });
        }

        let records = self
            .records
            .read()
            .map_err(|_| poisoned("records"))?
            .iter()
            .filter(|r| {
                r.record_type == record_type
                    && r.start_time <= range.end
                    && r.end_time >= range.start
            })
            .cloned()
            .collect();

        Ok(records)
    }
}

// ABOUTME: Wire payload structs for the daily upload endpoint
// ABOUTME: Maps a DailySnapshot to the server's raw_json schema with derived fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upload wire format.
//!
//! The backend ingests one JSON document per day. Fields the device
//! provider never supplies are sent as literal zeros (not omitted), and
//! two fields are derived at upload time: `sleep_hr` from sleep minutes
//! and `bmi` from weight and height when both are non-zero.

use crate::models::DailySnapshot;
use serde::Serialize;

/// Envelope fields the backend expects alongside the metrics
#[derive(Debug, Clone)]
pub struct UploadEnvelope {
    /// Session difficulty label
    pub difficulty: String,
    /// Session duration in minutes
    pub duration: u32,
}

/// The `raw_json` object: the daily metrics in the server's schema
///
/// Field order and names match the backend's ingest schema exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMetricsJson {
    /// Sleep duration in minutes
    pub sleep_min: f64,
    /// Sleep duration in hours (derived)
    pub sleep_hr: f64,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body height in meters
    pub height_m: f64,
    /// Body-mass index (derived; 0 when weight or height is missing)
    pub bmi: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Step count
    pub steps: f64,
    /// Step cadence in steps/minute
    pub steps_cadence: f64,
    /// Active calories in kilocalories
    pub active_calories: f64,
    /// Total calories in kilocalories
    pub total_calories: f64,
    /// Heart rate in beats per minute
    pub heart_rate: f64,
    /// Resting heart rate in beats per minute
    pub resting_heart_rate: f64,
    /// Blood oxygen saturation in percent
    pub oxygen_saturation: f64,
    /// Not supplied by the device provider; literal zero
    pub body_fat: f64,
    /// Not supplied by the device provider; literal zero
    pub lean_body: f64,
    /// Not supplied by the device provider; literal zero
    pub exercise_min: f64,
    /// Not supplied by the device provider; literal zero
    pub flights: f64,
    /// Not supplied by the device provider; literal zero
    pub calories_intake: f64,
    /// Not supplied by the device provider; literal zero
    pub hrv: f64,
    /// Not supplied by the device provider; literal zero
    pub systolic: f64,
    /// Not supplied by the device provider; literal zero
    pub diastolic: f64,
    /// Not supplied by the device provider; literal zero
    pub glucose: f64,
    /// Not supplied by the device provider; literal zero
    pub walking_heart_rate: f64,
}

/// One day's upload request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUploadRequest {
    /// Stable user identifier (email)
    pub user_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Daily metrics in the server's schema
    pub raw_json: RawMetricsJson,
    /// Session difficulty label
    pub difficulty: String,
    /// Session duration in minutes
    pub duration: u32,
}

impl DailyUploadRequest {
    /// Map a snapshot into the wire shape
    #[must_use]
    pub fn from_snapshot(
        snapshot: &DailySnapshot,
        user_id: &str,
        envelope: &UploadEnvelope,
    ) -> Self {
        let bmi = if snapshot.weight_kg > 0.0 && snapshot.height_m > 0.0 {
            snapshot.weight_kg / (snapshot.height_m * snapshot.height_m)
        } else {
            0.0
        };

        Self {
            user_id: user_id.to_owned(),
            date: snapshot.date_string(),
            raw_json: RawMetricsJson {
                sleep_min: snapshot.sleep_minutes,
                sleep_hr: snapshot.sleep_minutes / 60.0,
                weight: snapshot.weight_kg,
                height_m: snapshot.height_m,
                bmi,
                distance_km: snapshot.distance_km,
                steps: snapshot.steps,
                steps_cadence: snapshot.steps_cadence,
                active_calories: snapshot.active_calories_kcal,
                total_calories: snapshot.total_calories_kcal,
                heart_rate: snapshot.heart_rate_bpm,
                resting_heart_rate: snapshot.resting_heart_rate_bpm,
                oxygen_saturation: snapshot.oxygen_saturation_pct,
                body_fat: 0.0,
                lean_body: 0.0,
                exercise_min: 0.0,
                flights: 0.0,
                calories_intake: 0.0,
                hrv: 0.0,
                systolic: 0.0,
                diastolic: 0.0,
                glucose: 0.0,
                walking_heart_rate: 0.0,
            },
            difficulty: envelope.difficulty.clone(),
            duration: envelope.duration,
        }
    }
}

// ABOUTME: Batch upload of daily snapshots to the remote analysis backend
// ABOUTME: Wire payload mapping and per-day outcome tallying
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sync layer.
//!
//! One POST per day, outcomes keyed by date, no retries. A failure on one
//! day never stops the remaining days from being attempted, and the final
//! tally accounts for every day so partial data loss is never silent.

/// Wire payload structs and snapshot mapping
pub mod payload;

/// Batch uploader with per-day outcome tallying
pub mod uploader;

pub use payload::{DailyUploadRequest, RawMetricsJson, UploadEnvelope};
pub use uploader::SyncBatchUploader;

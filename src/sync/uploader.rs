// ABOUTME: Batch uploader posting one daily snapshot per request
// ABOUTME: Tallies per-day outcomes; a failed day never stops the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sync batch uploader.
//!
//! Uploads a [`DailyCollection`] one POST per day, sequentially and in
//! collection order (most-recent first). Each day is attempted exactly
//! once; there are no retries. Transport errors, non-2xx statuses, and
//! unparseable response bodies all count as that day's failure and are
//! recorded in the tally with the date they belong to.

use crate::config::SyncConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyCollection, DailySnapshot, UploadOutcome, UploadTally};
use crate::sync::payload::{DailyUploadRequest, UploadEnvelope};
use tracing::{debug, info, warn};

/// Uploads daily snapshots to the remote analysis backend
pub struct SyncBatchUploader {
    client: reqwest::Client,
    upload_url: String,
    envelope: UploadEnvelope,
}

impl SyncBatchUploader {
    /// Create an uploader from configuration
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the HTTP client cannot be built
    /// from the configured timeout.
    pub fn new(config: &SyncConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            upload_url: config.upload_url.clone(),
            envelope: config.envelope(),
        })
    }

    /// Upload every day in the collection, one POST per day
    ///
    /// Never aborts early: every day is attempted regardless of earlier
    /// failures, and the returned tally accounts for all of them
    /// (`succeeded + failed == attempted`).
    pub async fn upload_all(&self, collection: &DailyCollection, user_id: &str) -> UploadTally {
        info!(
            days = collection.len(),
            endpoint = %self.upload_url,
            "starting batch upload"
        );

        let mut outcomes = Vec::with_capacity(collection.len());
        for snapshot in collection {
            let outcome = self.upload_day(snapshot, user_id).await;
            if let Some(error) = &outcome.error {
                warn!(date = %outcome.date, error = %error, "day upload failed");
            } else {
                debug!(date = %outcome.date, "day upload acknowledged");
            }
            outcomes.push(outcome);
        }

        let tally = UploadTally::from_outcomes(outcomes);
        info!(
            attempted = tally.attempted,
            succeeded = tally.succeeded,
            failed = tally.failed,
            status = ?tally.status(),
            "batch upload finished"
        );
        tally
    }

    /// Upload one day's snapshot and classify the result
    async fn upload_day(&self, snapshot: &DailySnapshot, user_id: &str) -> UploadOutcome {
        let request = DailyUploadRequest::from_snapshot(snapshot, user_id, &self.envelope);
        let date = request.date.clone();

        let response = match self
            .client
            .post(&self.upload_url)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return UploadOutcome::failure(date, format!("transport error: {e}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return UploadOutcome::failure(
                date,
                format!("server returned {status}: {body}"),
            );
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return UploadOutcome::failure(date, format!("failed to read response body: {e}"));
            }
        };

        if serde_json::from_str::<serde_json::Value>(&body).is_err() {
            return UploadOutcome::failure(date, "malformed response body".to_owned());
        }

        UploadOutcome::success(date)
    }
}

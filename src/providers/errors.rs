// ABOUTME: Structured error types for health data provider operations
// ABOUTME: Separates store-wide unavailability from per-record-type read failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider error taxonomy.
//!
//! The distinction that matters to the aggregator is fatality:
//! [`ProviderError::Unavailable`] aborts the whole collection fetch, while
//! a [`ProviderError::RecordRead`] is recovered locally (the metric
//! defaults to zero and the day's snapshot is still emitted).

use crate::models::RecordType;
use thiserror::Error;

/// Result type alias using [`ProviderError`]
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from health data provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The data store as a whole cannot serve reads; fatal to the current
    /// collection fetch
    #[error("provider {provider} is unavailable: {details}")]
    Unavailable {
        /// Provider name
        provider: String,
        /// Failure detail
        details: String,
    },

    /// Reading one record type failed; recovered by the aggregator
    #[error("failed to read {record_type} records from {provider}: {details}")]
    RecordRead {
        /// Provider name
        provider: String,
        /// Record type whose read failed
        record_type: RecordType,
        /// Failure detail
        details: String,
    },

    /// Provider is misconfigured (including poisoned internal locks)
    #[error("provider {provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// Failure detail
        details: String,
    },
}

impl ProviderError {
    /// Whether this error aborts the whole collection fetch
    ///
    /// Only store-wide unavailability is fatal; everything else is scoped
    /// to one metric and defaults that metric to zero.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

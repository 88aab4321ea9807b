// ABOUTME: Unified error handling for the engine layer
// ABOUTME: Distinguishes permission, provider, configuration, and input errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling
//!
//! Engine-level error taxonomy. Permission-missing errors are surfaced
//! distinctly from provider errors so callers can route to the grant flow
//! instead of retrying the fetch. Per-metric read failures and per-day
//! upload failures are recovered locally and never reach this type; only
//! conditions that abort an operation do.

use crate::permissions::Scope;
use crate::providers::errors::ProviderError;
use thiserror::Error;

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for engine operations
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more required read scopes are not granted; the caller must
    /// drive the grant flow before collecting
    #[error("missing required read permissions: {}", format_scopes(.missing))]
    PermissionMissing {
        /// The scopes that are required but not granted
        missing: Vec<Scope>,
    },

    /// The underlying data store failed in a way that aborts the fetch
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Invalid caller-supplied input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error should route the caller to the grant flow
    #[must_use]
    pub const fn is_permission_missing(&self) -> bool {
        matches!(self, Self::PermissionMissing { .. })
    }
}

fn format_scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

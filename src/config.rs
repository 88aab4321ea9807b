// ABOUTME: Environment-driven runtime configuration for the sync engine
// ABOUTME: Upload endpoint, timeouts, day window, and upload envelope defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! All configuration is read from the environment with sensible defaults,
//! so the engine runs with zero setup against a local backend. Malformed
//! numeric values fall back to the default rather than aborting startup.

use crate::constants::{defaults, env_config};
use crate::sync::UploadEnvelope;
use std::env;
use std::time::Duration;
use tracing::warn;

/// Configuration for collection and upload
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Endpoint that receives one daily snapshot per POST
    pub upload_url: String,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Number of trailing days to collect when none is specified
    pub default_days: u32,
    /// Session difficulty label sent in the upload envelope
    pub difficulty: String,
    /// Session duration in minutes sent in the upload envelope
    pub session_duration_min: u32,
    /// Stable user identifier (email) attached to uploads, if configured
    pub user_id: Option<String>,
}

impl SyncConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables use the built-in defaults; malformed numeric values
    /// are logged and replaced by the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            upload_url: env_var_or(env_config::UPLOAD_URL, defaults::UPLOAD_URL),
            request_timeout: Duration::from_secs(parse_env_or(
                env_config::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            )),
            default_days: parse_env_or(env_config::DEFAULT_DAYS, defaults::DAYS),
            difficulty: env_var_or(env_config::DIFFICULTY, defaults::DIFFICULTY),
            session_duration_min: parse_env_or(
                env_config::SESSION_DURATION_MIN,
                defaults::SESSION_DURATION_MIN,
            ),
            user_id: env::var(env_config::USER_ID).ok(),
        }
    }

    /// The upload envelope carried alongside every day's metrics
    #[must_use]
    pub fn envelope(&self) -> UploadEnvelope {
        UploadEnvelope {
            difficulty: self.difficulty.clone(),
            duration: self.session_duration_min,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            upload_url: defaults::UPLOAD_URL.to_owned(),
            request_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            default_days: defaults::DAYS,
            difficulty: defaults::DIFFICULTY.to_owned(),
            session_duration_min: defaults::SESSION_DURATION_MIN,
            user_id: None,
        }
    }
}

fn env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn parse_env_or<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, fallback = %default, "malformed numeric value; using default");
            default
        }),
        Err(_) => default,
    }
}

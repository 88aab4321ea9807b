// ABOUTME: Application constants and configuration values organized by domain
// ABOUTME: Environment variable names, defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application-wide constants organized by domain

/// Environment variable names
pub mod env_config {
    /// Remote endpoint that receives one daily snapshot per POST
    pub const UPLOAD_URL: &str = "VITALSYNC_UPLOAD_URL";
    /// Per-request HTTP timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "VITALSYNC_HTTP_TIMEOUT_SECS";
    /// Default number of trailing days to collect
    pub const DEFAULT_DAYS: &str = "VITALSYNC_DEFAULT_DAYS";
    /// Session difficulty label sent in the upload envelope
    pub const DIFFICULTY: &str = "VITALSYNC_DIFFICULTY";
    /// Session duration in minutes sent in the upload envelope
    pub const SESSION_DURATION_MIN: &str = "VITALSYNC_SESSION_DURATION_MIN";
    /// Stable user identifier (email) attached to uploads
    pub const USER_ID: &str = "VITALSYNC_USER_ID";
}

/// Default configuration values
pub mod defaults {
    /// Default upload endpoint (local backend during development)
    pub const UPLOAD_URL: &str = "http://localhost:8000/api/auto/upload";
    /// Default per-request HTTP timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default number of trailing days to collect
    pub const DAYS: u32 = 1;
    /// Default session difficulty label expected by the backend
    pub const DIFFICULTY: &str = "중";
    /// Default session duration in minutes expected by the backend
    pub const SESSION_DURATION_MIN: u32 = 30;
}

/// Service identifiers for structured logging
pub mod service_names {
    /// The engine's service name
    pub const VITALSYNC: &str = "vitalsync";
}

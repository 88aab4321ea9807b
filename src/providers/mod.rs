// ABOUTME: Health data provider abstractions and implementations
// ABOUTME: Core trait, structured provider errors, and the synthetic in-memory provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider system for reading raw health records.
//!
//! A provider exposes exactly one operation the engine cares about:
//! `read_records(record_type, time_range)`. The engine calls it once per
//! metric per day and unifies the heterogeneous payloads downstream.

/// Core provider trait and time-range types
pub mod core;

/// Structured error types for provider operations
pub mod errors;

/// In-memory synthetic provider for development and testing
pub mod synthetic;

pub use core::{HealthDataProvider, TimeRange};
pub use errors::{ProviderError, ProviderResult};
pub use synthetic::SyntheticHealthProvider;

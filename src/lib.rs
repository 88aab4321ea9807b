// ABOUTME: Main library entry point for the VitalSync health metrics engine
// ABOUTME: Provides daily aggregation and batch upload of device-local health data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # VitalSync
//!
//! A client-side engine that reads heterogeneous time-series health metrics
//! from a device-local health data provider, aggregates them into normalized
//! daily snapshots, and synchronizes those snapshots to a remote analysis
//! backend with per-day partial-failure accounting.
//!
//! ## Architecture
//!
//! The engine follows a modular, leaf-first architecture:
//! - **Providers**: Abstract health data provider implementations
//! - **Aggregator**: Per-metric reducers, daily aggregation, range collection
//! - **Sync**: Batch uploader with per-day outcome tallying
//! - **Permissions**: Read-scope gate consulted before any provider call
//! - **Config**: Environment-based configuration management
//!
//! ## Data flow
//!
//! Permission gate → range collector → daily aggregator (× N days) →
//! in-memory collection → batch uploader (one request per day) → tally.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalsync::aggregator::range::RangeCollector;
//! use vitalsync::permissions::InMemoryPermissionGate;
//! use vitalsync::providers::synthetic::SyntheticHealthProvider;
//!
//! # async fn example() -> vitalsync::errors::AppResult<()> {
//! let provider = Arc::new(SyntheticHealthProvider::new());
//! let gate = Arc::new(InMemoryPermissionGate::with_all_granted());
//! let collector = RangeCollector::new(provider, gate);
//!
//! let collection = collector.collect(7).await?;
//! println!("latest day: {:?}", collection.latest());
//! # Ok(())
//! # }
//! ```

/// Daily aggregation pipeline: metric reducers, daily aggregator, range collector
pub mod aggregator;

/// Environment-based configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling for the engine layer
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models (records, snapshots, upload outcomes)
pub mod models;

/// Read-scope permission gate consulted before data collection
pub mod permissions;

/// Health data provider abstractions and implementations
pub mod providers;

/// Batch upload of daily snapshots to the remote backend
pub mod sync;

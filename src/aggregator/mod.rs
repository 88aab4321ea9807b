// ABOUTME: Daily aggregation pipeline for heterogeneous health records
// ABOUTME: Metric reducers, per-day aggregation, and trailing-range collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation pipeline.
//!
//! Eleven independently-shaped record types are unified through a single
//! metric table: each metric names the record type it reads, a reduction
//! rule, a unit scale, and a rounding precision. Adding a twelfth metric
//! means adding one table entry, not another conditional branch.

/// Per-day aggregation of all metrics into one snapshot
pub mod daily;

/// Metric table and reduction rules
pub mod reducers;

/// Trailing-day range collection with permission gating
pub mod range;

pub use daily::DailyAggregator;
pub use range::RangeCollector;
pub use reducers::{metric_table, reduce, MetricSpec, ReduceRule};

//! Streaming aggregation of log lines into counters and metrics.
//!
//! This module transforms a line source into:
//! - Per-level record counts
//! - A capped sample of error messages
//! - Level distribution statistics

pub mod metrics;
pub mod stream;

// Re-export main types and functions
pub use metrics::{calculate_level_distribution, LevelDistribution};
pub use stream::{aggregate, aggregate_reader, source_filename, Aggregator};

//! Line matching and schema definitions.
//!
//! This module handles:
//! - Matching raw lines against the `timestamp, level, message` structure
//! - Defining the result and report schema

pub mod line;
pub mod schema;

// Re-export main types
pub use line::match_line;
pub use schema::{AggregateResult, AnalysisReport, ParsedRecord};

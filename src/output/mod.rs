//! Output writers for aggregation results.
//!
//! This module handles:
//! - JSON reports (pretty and compact)
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, to_report, write_report, write_report_compact};
pub use text::render_summary;

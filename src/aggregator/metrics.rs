//! Derived statistics over an aggregate result.
//!
//! These are computed after the pass from the final counters and never
//! touch the source again.

use crate::parser::schema::AggregateResult;
use log::debug;

/// Level distribution statistics
///
/// **Public** - returned from calculate_level_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelDistribution {
    /// Lines that matched the record structure
    pub matched_lines: u64,

    /// Lines counted in total but not classified
    pub unmatched_lines: u64,

    /// Number of distinct level tokens
    pub distinct_levels: usize,

    /// Errors as a percentage of matched records
    pub error_rate: f64,

    /// Warnings as a percentage of matched records
    pub warning_rate: f64,

    /// Most frequent level and its count
    pub dominant_level: Option<(String, u64)>,
}

/// Calculate level distribution statistics
///
/// **Public** - provides summary statistics for logging and display
pub fn calculate_level_distribution(result: &AggregateResult) -> LevelDistribution {
    let matched_lines = result.matched_lines();

    // Ties go to the alphabetically first level
    let dominant_level = result
        .log_levels
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(level, count)| (level.clone(), *count));

    debug!(
        "Level distribution: {} matched, {} levels",
        matched_lines,
        result.log_levels.len()
    );

    LevelDistribution {
        matched_lines,
        unmatched_lines: result.total_lines.saturating_sub(matched_lines),
        distinct_levels: result.log_levels.len(),
        error_rate: percentage(result.errors_found, matched_lines),
        warning_rate: percentage(result.warnings_found, matched_lines),
        dominant_level,
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

impl LevelDistribution {
    /// Returns true if more than half of the matched records are errors
    pub fn is_error_heavy(&self) -> bool {
        self.error_rate > 50.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let dominant = self
            .dominant_level
            .as_ref()
            .map(|(level, count)| format!("{} ({})", level, count))
            .unwrap_or_else(|| "none".to_string());

        format!(
            "Matched: {} | Unmatched: {} | Levels: {} | Errors: {:.1}% | Warnings: {:.1}% | Dominant: {}",
            self.matched_lines,
            self.unmatched_lines,
            self.distinct_levels,
            self.error_rate,
            self.warning_rate,
            dominant
        )
    }
}

//! Record and result schema definitions.
//!
//! `ParsedRecord` is the transient view of one matched line.
//! `AggregateResult` is what an aggregation pass hands back to the caller,
//! and `AnalysisReport` is the versioned envelope we write to disk.

use crate::utils::config::{ERROR_LEVEL, MAX_ERROR_LINES, WARNING_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One classified log line, borrowing its fields from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRecord<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub message: &'a str,
}

/// Aggregated statistics for one log source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Every line read, matched or not
    pub total_lines: u64,

    /// Records whose level is exactly "Error"
    pub errors_found: u64,

    /// Records whose level is exactly "Warning"
    pub warnings_found: u64,

    /// Count per distinct level token
    pub log_levels: BTreeMap<String, u64>,

    /// Messages of the first error records, in encounter order
    pub error_lines: Vec<String>,

    /// Basename of the source
    pub filename: String,
}

impl AggregateResult {
    /// Number of lines that matched the record structure
    pub fn matched_lines(&self) -> u64 {
        self.log_levels.values().sum()
    }

    /// Count recorded for a level token (0 if never seen)
    pub fn level_count(&self, level: &str) -> u64 {
        self.log_levels.get(level).copied().unwrap_or(0)
    }

    /// Check the relations that hold for every result produced by a pass
    ///
    /// **Public** - used when a report is read back from disk
    pub fn check_invariants(&self) -> Result<(), String> {
        let errors = self.level_count(ERROR_LEVEL);
        if self.errors_found != errors {
            return Err(format!(
                "errors_found is {} but log_levels records {} {} entries",
                self.errors_found, errors, ERROR_LEVEL
            ));
        }

        let warnings = self.level_count(WARNING_LEVEL);
        if self.warnings_found != warnings {
            return Err(format!(
                "warnings_found is {} but log_levels records {} {} entries",
                self.warnings_found, warnings, WARNING_LEVEL
            ));
        }

        let matched = self.matched_lines();
        if matched > self.total_lines {
            return Err(format!(
                "{} matched records exceed {} total lines",
                matched, self.total_lines
            ));
        }

        let expected_samples = self.errors_found.min(MAX_ERROR_LINES as u64);
        if self.error_lines.len() as u64 != expected_samples {
            return Err(format!(
                "expected {} error lines, found {}",
                expected_samples,
                self.error_lines.len()
            ));
        }

        Ok(())
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// The aggregation result itself
    pub analysis: AggregateResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AggregateResult {
        let mut log_levels = BTreeMap::new();
        log_levels.insert("Error".to_string(), 2);
        log_levels.insert("Warning".to_string(), 1);
        log_levels.insert("Information".to_string(), 4);

        AggregateResult {
            total_lines: 9,
            errors_found: 2,
            warnings_found: 1,
            log_levels,
            error_lines: vec!["disk full".to_string(), "timeout".to_string()],
            filename: "app.log".to_string(),
        }
    }

    #[test]
    fn test_consistent_result_passes() {
        assert!(sample().check_invariants().is_ok());
        assert_eq!(sample().matched_lines(), 7);
        assert_eq!(sample().level_count("Debug"), 0);
    }

    #[test]
    fn test_error_count_mismatch() {
        let mut result = sample();
        result.errors_found = 3;
        assert!(result.check_invariants().is_err());
    }

    #[test]
    fn test_matched_exceeds_total() {
        let mut result = sample();
        result.total_lines = 5;
        let err = result.check_invariants().unwrap_err();
        assert!(err.contains("exceed"));
    }

    #[test]
    fn test_error_line_sample_mismatch() {
        let mut result = sample();
        result.error_lines.pop();
        assert!(result.check_invariants().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        for field in [
            "total_lines",
            "errors_found",
            "warnings_found",
            "log_levels",
            "error_lines",
            "filename",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["log_levels"]["Information"], 4);
    }
}

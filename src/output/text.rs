//! Plain-text summary of an aggregate result.

use crate::aggregator::metrics::calculate_level_distribution;
use crate::parser::schema::AggregateResult;

/// Render a human-readable summary
///
/// **Public** - used by the analyze command when `--summary` is set
///
/// # Arguments
/// * `result` - Result to describe
/// * `max_errors` - Number of sampled error messages to include
pub fn render_summary(result: &AggregateResult, max_errors: usize) -> String {
    let dist = calculate_level_distribution(result);
    let mut out = String::new();

    out.push_str(&format!("File:        {}\n", result.filename));
    out.push_str(&format!("Total lines: {}\n", result.total_lines));
    out.push_str(&format!("Errors:      {}\n", result.errors_found));
    out.push_str(&format!("Warnings:    {}\n", result.warnings_found));
    out.push_str(&format!("Unmatched:   {}\n", dist.unmatched_lines));

    let mut levels: Vec<(&String, &u64)> = result.log_levels.iter().collect();
    levels.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    if !levels.is_empty() {
        out.push('\n');
        out.push_str(&format!("{:<20} {:>10} {:>8}\n", "Level", "Count", "Share"));
        for (level, count) in levels {
            let share = if dist.matched_lines > 0 {
                (*count as f64 / dist.matched_lines as f64) * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("{:<20} {:>10} {:>7.1}%\n", level, count, share));
        }
    }

    if !result.error_lines.is_empty() && max_errors > 0 {
        out.push('\n');
        out.push_str("First errors:\n");
        for (i, message) in result.error_lines.iter().take(max_errors).enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, message));
        }
        let remaining = result.errors_found.saturating_sub(max_errors as u64);
        if remaining > 0 {
            out.push_str(&format!("  ... and {} more\n", remaining));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> AggregateResult {
        let mut log_levels = BTreeMap::new();
        log_levels.insert("Error".to_string(), 3);
        log_levels.insert("Information".to_string(), 5);

        AggregateResult {
            total_lines: 9,
            errors_found: 3,
            warnings_found: 0,
            log_levels,
            error_lines: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            filename: "app.log".to_string(),
        }
    }

    #[test]
    fn test_summary_orders_levels_by_count() {
        let text = render_summary(&sample(), 10);
        let info = text.find("Information").unwrap();
        let error = text.find("\nError ").unwrap();
        assert!(info < error);
        assert!(text.contains("Unmatched:   1"));
    }

    #[test]
    fn test_summary_truncates_errors() {
        let text = render_summary(&sample(), 2);
        assert!(text.contains("  1. a"));
        assert!(text.contains("  2. b"));
        assert!(!text.contains("  3. c"));
        assert!(text.contains("... and 1 more"));
    }

    #[test]
    fn test_summary_without_errors_section() {
        let text = render_summary(&sample(), 0);
        assert!(!text.contains("First errors"));
    }
}

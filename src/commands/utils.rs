use crate::output::read_report;
use crate::parser::schema::AnalysisReport;
use crate::utils::config::{MAX_ERROR_LINES, SCHEMA_VERSION};
use crate::utils::error::OutputError;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<AnalysisReport> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    report
        .analysis
        .check_invariants()
        .map_err(OutputError::InvalidReport)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  File: {}", report.analysis.filename);
    println!("  Total Lines: {}", report.analysis.total_lines);
    println!("  Errors: {}", report.analysis.errors_found);
    println!("  Warnings: {}", report.analysis.warnings_found);
    println!("  Levels: {}", report.analysis.log_levels.len());

    Ok(report)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Log Aggregator Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  analysis: object           - Aggregation result");
        println!("    total_lines: number      - All lines read, matched or not");
        println!("    errors_found: number     - Records with level 'Error'");
        println!("    warnings_found: number   - Records with level 'Warning'");
        println!("    log_levels: object       - Count per level token");
        println!("    error_lines: array       - First {} error messages", MAX_ERROR_LINES);
        println!("    filename: string         - Basename of the source");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Log Aggregator v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A streaming severity classifier for structured text logs.");
}

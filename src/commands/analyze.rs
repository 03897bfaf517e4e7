//! Analyze command implementation.
//!
//! The analyze command plays the caller around the aggregation core:
//! 1. Validates the source (extension, size)
//! 2. Runs the aggregation pass
//! 3. Wraps the result in a report
//! 4. Writes the report and an optional text summary
//! 5. Optionally removes the source artifact, on success or failure

use crate::aggregator::{aggregate, calculate_level_distribution};
use crate::output::{
    render_summary, report_to_string, to_report, write_report, write_report_compact,
};
use crate::parser::schema::AnalysisReport;
use crate::utils::config::{ALLOWED_EXTENSIONS, DEFAULT_MAX_BYTES, DEFAULT_SUMMARY_ERRORS};
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log file to analyze
    pub input: PathBuf,

    /// Output path for JSON report (stdout when absent)
    pub output_json: Option<PathBuf>,

    /// Write compact JSON instead of pretty JSON
    pub compact: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Error messages shown in the text summary
    pub summary_errors: usize,

    /// Largest accepted source, in bytes
    pub max_bytes: u64,

    /// Delete the source once analysis is over
    pub remove_source: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: None,
            compact: false,
            print_summary: false,
            summary_errors: DEFAULT_SUMMARY_ERRORS,
            max_bytes: DEFAULT_MAX_BYTES,
            remove_source: false,
        }
    }
}

/// Removes the source file when dropped, if enabled
struct SourceCleanup<'a> {
    path: &'a Path,
    enabled: bool,
}

impl Drop for SourceCleanup<'_> {
    fn drop(&mut self) {
        if !self.enabled || !self.path.exists() {
            return;
        }
        match std::fs::remove_file(self.path) {
            Ok(()) => debug!("Removed source: {}", self.path.display()),
            Err(e) => warn!("Failed to remove source {}: {}", self.path.display(), e),
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was emitted
///
/// # Errors
/// * Source too large
/// * Source unreadable ("Could not read file")
/// * Read failure mid-pass ("File processing failed")
/// * Report write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<AnalysisReport> {
    let start_time = Instant::now();
    let _cleanup = SourceCleanup {
        path: &args.input,
        enabled: args.remove_source,
    };

    info!("Analyzing log file: {}", args.input.display());

    check_source_size(&args.input, args.max_bytes)?;

    let result = aggregate(&args.input).map_err(|err| {
        let message = match &err {
            AggregateError::SourceUnavailable { .. } => {
                format!("Could not read file {}", args.input.display())
            }
            AggregateError::AggregationFailed { .. } => {
                "File processing failed. Check log format.".to_string()
            }
        };
        anyhow::Error::new(err).context(message)
    })?;

    let dist = calculate_level_distribution(&result);
    info!("Level distribution: {}", dist.summary());
    if dist.is_error_heavy() {
        warn!("More than half of the classified records are errors");
    }

    let report = to_report(result);

    match &args.output_json {
        Some(path) => {
            let written = if args.compact {
                write_report_compact(&report, path)
            } else {
                write_report(&report, path)
            };
            written.context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let rendered = report_to_string(&report, !args.compact)
                .context("Failed to render report JSON")?;
            println!("{}", rendered);
        }
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("LOG SUMMARY");
        println!("{}", "=".repeat(60));
        print!("{}", render_summary(&report.analysis, args.summary_errors));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Reject sources larger than the configured limit
///
/// **Private** - a missing file is left for aggregate to report
fn check_source_size(path: &Path, max_bytes: u64) -> Result<()> {
    if let Ok(metadata) = std::fs::metadata(path) {
        if metadata.is_file() && metadata.len() > max_bytes {
            anyhow::bail!(
                "File too large: {} bytes (limit {} bytes)",
                metadata.len(),
                max_bytes
            );
        }
    }
    Ok(())
}

/// Check whether a file name carries an accepted extension
///
/// **Public** - extension is taken after the last dot, case-insensitive
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    let filename = args
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    if !allowed_file(filename) {
        anyhow::bail!(
            "File type not allowed (expected one of: {})",
            ALLOWED_EXTENSIONS.join(", ")
        );
    }

    if args.max_bytes == 0 {
        anyhow::bail!("max_bytes must be greater than 0");
    }

    Ok(())
}

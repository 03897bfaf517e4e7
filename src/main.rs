//! Log Aggregator CLI
//!
//! Classifies the lines of a structured log file by severity and writes
//! the aggregated counts as a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use log_aggregator::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};
use log_aggregator::utils::config::{DEFAULT_MAX_BYTES, DEFAULT_SUMMARY_ERRORS};

/// Log Aggregator - severity counts for structured text logs
#[derive(Parser, Debug)]
#[command(name = "log-aggregator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a log file
    Analyze {
        /// Log file to analyze (.log or .txt)
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of error messages in the text summary
        #[arg(long, default_value_t = DEFAULT_SUMMARY_ERRORS)]
        summary_errors: usize,

        /// Largest accepted log file, in bytes
        #[arg(long, env = "LOG_AGGREGATOR_MAX_BYTES", default_value_t = DEFAULT_MAX_BYTES)]
        max_bytes: u64,

        /// Delete the log file after analysis, even if it fails
        #[arg(long)]
        remove_source: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            file,
            output,
            compact,
            summary,
            summary_errors,
            max_bytes,
            remove_source,
        } => {
            let args = AnalyzeArgs {
                input: file,
                output_json: output,
                compact,
                print_summary: summary,
                summary_errors,
                max_bytes,
                remove_source,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

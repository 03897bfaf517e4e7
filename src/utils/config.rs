//! Configuration and constants for the aggregator and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Maximum number of error messages kept in a result
pub const MAX_ERROR_LINES: usize = 50;

// Level tokens are compared case-sensitively, exact match only
pub const ERROR_LEVEL: &str = "Error";
pub const WARNING_LEVEL: &str = "Warning";

/// File extensions the CLI accepts as log sources
pub const ALLOWED_EXTENSIONS: &[&str] = &["log", "txt"];

/// Default upload size limit
pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

/// Error messages shown in the text summary by default
pub const DEFAULT_SUMMARY_ERRORS: usize = 10;

//! Single-pass streaming aggregation over a log source.
//!
//! Lines are read one at a time, classified with the line matcher and
//! folded into running counters. Nothing but the counters and the capped
//! error sample is retained between lines.

use crate::parser::line::match_line;
use crate::parser::schema::AggregateResult;
use crate::utils::config::{ERROR_LEVEL, MAX_ERROR_LINES, WARNING_LEVEL};
use crate::utils::error::AggregateError;
use log::{debug, info};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Running state of one aggregation pass
///
/// Each pass owns its own instance; nothing is shared between passes.
#[derive(Debug)]
pub struct Aggregator {
    total_lines: u64,
    log_levels: BTreeMap<String, u64>,
    error_lines: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            log_levels: BTreeMap::new(),
            error_lines: Vec::with_capacity(MAX_ERROR_LINES),
        }
    }

    /// Fold one line into the running counters
    ///
    /// Returns whether the line matched the record structure.
    pub fn observe(&mut self, line: &str) -> bool {
        self.total_lines += 1;

        let Some(record) = match_line(line) else {
            return false;
        };

        match self.log_levels.get_mut(record.level) {
            Some(count) => *count += 1,
            None => {
                self.log_levels.insert(record.level.to_string(), 1);
            }
        }

        if record.level == ERROR_LEVEL && self.error_lines.len() < MAX_ERROR_LINES {
            self.error_lines.push(record.message.to_string());
        }

        true
    }

    /// Lines observed so far
    pub fn lines_read(&self) -> u64 {
        self.total_lines
    }

    /// Finalize the pass into a result
    pub fn finish(self, filename: impl Into<String>) -> AggregateResult {
        let level_count = |level: &str| self.log_levels.get(level).copied().unwrap_or(0);
        let errors_found = level_count(ERROR_LEVEL);
        let warnings_found = level_count(WARNING_LEVEL);

        AggregateResult {
            total_lines: self.total_lines,
            errors_found,
            warnings_found,
            log_levels: self.log_levels,
            error_lines: self.error_lines,
            filename: filename.into(),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate a log file on disk
///
/// **Public** - main entry point for callers holding a path
///
/// # Arguments
/// * `path` - Path to an already materialized log file
///
/// # Returns
/// The aggregate result, with `filename` set to the basename of `path`
///
/// # Errors
/// * `AggregateError::SourceUnavailable` - File missing, unreadable, or a directory
/// * `AggregateError::AggregationFailed` - I/O failure while reading lines
///
/// The file handle is closed before this function returns.
pub fn aggregate(path: impl AsRef<Path>) -> Result<AggregateResult, AggregateError> {
    let path = path.as_ref();

    info!("Starting analysis of file: {}", path.display());

    let file = open_source(path)?;
    let result = aggregate_reader(BufReader::new(file), source_filename(path))?;

    info!(
        "Analysis complete: {} errors found in {} lines",
        result.errors_found, result.total_lines
    );

    Ok(result)
}

/// Aggregate any buffered line source
///
/// **Public** - streaming pass used by `aggregate` and by callers that
/// already hold a reader
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
/// UTF-8 are replaced rather than failing the pass.
///
/// # Errors
/// * `AggregateError::AggregationFailed` - the reader returned an error;
///   no partial result is produced
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    filename: impl Into<String>,
) -> Result<AggregateResult, AggregateError> {
    let mut lines = LineSplitter::new(reader);
    let mut aggregator = Aggregator::new();
    let mut buf = Vec::new();
    let mut unmatched: u64 = 0;

    loop {
        let more = lines
            .next_line(&mut buf)
            .map_err(|source| AggregateError::AggregationFailed {
                lines_read: aggregator.lines_read(),
                source,
            })?;

        if !more {
            break;
        }

        let line = decode_line(&buf);
        if !aggregator.observe(&line) {
            unmatched += 1;
        }
    }

    debug!(
        "Read {} lines, {} did not match the record structure",
        aggregator.lines_read(),
        unmatched
    );

    Ok(aggregator.finish(filename))
}

/// Basename of a source path, as shown to the user
pub fn source_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Open a source for reading
///
/// **Private** - internal helper for aggregate
fn open_source(path: &Path) -> Result<File, AggregateError> {
    let unavailable = |source: io::Error| AggregateError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let metadata = file.metadata().map_err(unavailable)?;

    if metadata.is_dir() {
        return Err(unavailable(io::Error::other("source is a directory")));
    }

    debug!("Opened {} ({} bytes)", path.display(), metadata.len());

    Ok(file)
}

/// Splits a byte stream on `\n`, `\r\n` or a lone `\r`
///
/// **Private** - internal helper for aggregate_reader
struct LineSplitter<R> {
    reader: R,
    // Last line ended in `\r`; a `\n` right after it belongs to that line
    skip_lf: bool,
}

impl<R: BufRead> LineSplitter<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    /// Read the next line into `buf`, without its terminator
    ///
    /// Returns `false` at end of input.
    fn next_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(read_any);
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            read_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

/// Decode one line, replacing invalid UTF-8
///
/// **Private** - internal helper for aggregate_reader
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

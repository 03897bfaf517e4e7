//! Line matcher for `timestamp, level, message` records.
//!
//! Example line:
//! `10/26/2025 10:07:25 PM, Information, e2fcef22-95ca-472e-bf8c-ab8db4d54600, Request started`
//!
//! The timestamp runs up to the first comma, the level is a single token
//! between the first and second comma, and the message is everything after
//! the second comma. Commas inside the message are not split further.

use super::schema::ParsedRecord;
use regex::Regex;
use std::sync::LazyLock;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // timestamp: anything up to the first comma
        r"^(?P<timestamp>[^,]+),",
        // level: one token of non-whitespace, non-comma characters
        r"\s*(?P<level>[^\s,]+)\s*,",
        // message: the rest of the line
        r"\s*(?P<message>.*)",
    ))
    .expect("line pattern is a valid regex")
});

/// Match one line against the record structure
///
/// **Public** - main entry point for line classification
///
/// # Arguments
/// * `line` - A single line with its line terminator already removed
///
/// # Returns
/// The extracted record, or `None` when the line does not have the
/// expected shape. A non-matching line is not an error.
pub fn match_line(line: &str) -> Option<ParsedRecord<'_>> {
    let caps = LINE_PATTERN.captures(line)?;

    Some(ParsedRecord {
        timestamp: caps.name("timestamp")?.as_str(),
        level: caps.name("level")?.as_str(),
        message: caps.name("message")?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_simple_line() {
        let record = match_line("a,Warning,oops").unwrap();
        assert_eq!(record.timestamp, "a");
        assert_eq!(record.level, "Warning");
        assert_eq!(record.message, "oops");
    }

    #[test]
    fn test_level_whitespace_trimmed() {
        let record = match_line("t,   Error \t,msg").unwrap();
        assert_eq!(record.level, "Error");
        assert_eq!(record.message, "msg");
    }

    #[test]
    fn test_message_keeps_commas_and_trailing_space() {
        let record = match_line("t, Error, a, b, c  ").unwrap();
        assert_eq!(record.message, "a, b, c  ");
    }

    #[test]
    fn test_empty_message_matches() {
        let record = match_line("t,Error,").unwrap();
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_fewer_than_two_commas() {
        assert!(match_line("").is_none());
        assert!(match_line("no commas at all").is_none());
        assert!(match_line("t,Error only one comma").is_none());
    }

    #[test]
    fn test_empty_level_never_matches() {
        assert!(match_line("t,,msg").is_none());
        assert!(match_line("t,   ,msg").is_none());
    }

    #[test]
    fn test_empty_timestamp_never_matches() {
        assert!(match_line(",Error,msg").is_none());
    }

    #[test]
    fn test_level_with_inner_space_never_matches() {
        assert!(match_line("t, Bad Level, msg").is_none());
    }
}

//! Log Aggregator
//!
//! Streaming severity classification for structured text logs of the form
//! `timestamp, level, message`.
//!
//! A single pass over the source counts every line, tallies records per
//! level and keeps the messages of the first 50 `Error` records. Lines that
//! do not have the expected shape are counted but otherwise skipped.
//!
//! ## Getting Started
//!
//! ```no_run
//! let result = log_aggregator::aggregator::aggregate("uploads/app.log")?;
//! println!("{} errors in {} lines", result.errors_found, result.total_lines);
//! # Ok::<(), log_aggregator::utils::error::AggregateError>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

//! Human-readable words for machine time.
//!
//! Converts epoch timestamps and second counts into English phrases, and
//! parses human-written duration strings back into seconds:
//! - **[`relative`]**: relative-time phrasing ("3 hours ago", "in 2 days")
//! - **[`duration`]**: duration rendering ("1 day, 2 hours") and parsing
//!   ("2h 30m", "1:30:45", "1 day, 2 hours, and 30 minutes")
//! - **[`date`]**: contextual date labels ("Today", "Last Friday") and
//!   smart date-range abbreviation ("January 15–22, 2024")
//!
//! All timestamps are UTC epoch seconds. Every function is a pure mapping
//! from its arguments to a string or a typed error; nothing here touches
//! the system clock, the filesystem, or any shared state.
//!
//! ## Usage
//!
//! ```rust
//! use whenwords::{format_duration, parse_duration, time_ago, DurationFormatOptions};
//!
//! assert_eq!(time_ago(1_704_061_800, 1_704_067_200), "2 hours ago");
//!
//! let compact = DurationFormatOptions::new().compact(true);
//! assert_eq!(format_duration(3_661.0, &compact).unwrap(), "1h 1m");
//!
//! assert_eq!(parse_duration("2h 30m").unwrap(), 9_000);
//! assert_eq!(parse_duration("2:30").unwrap(), 9_000);
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

mod calendar;
pub mod date;
pub mod duration;
pub mod relative;

// Re-export commonly used items
pub use date::{format_range, label_date};
pub use duration::format::{format_duration, DurationFormatError, DurationFormatOptions};
pub use duration::parse::{parse_duration, DurationParseError};
pub use relative::time_ago;

//! Duration rendering and parsing
//!
//! - **[`format`]**: non-negative seconds → human-readable breakdown
//!   ("1 day, 2 hours" or compact "1d 2h")
//! - **[`parse`]**: human-written duration text → total seconds, covering
//!   free text ("2 hours and 30 minutes"), compact suffixes ("2h 30m"),
//!   and colon notation ("2:30:45")
//!
//! The two directions deliberately disagree on units: the renderer knows
//! nominal months and years, the parser accepts weeks but no month token
//! (`m` always means minutes on input).

pub mod format;
pub mod parse;

// Re-export commonly used items
pub use format::{format_duration, DurationFormatError, DurationFormatOptions};
pub use parse::{parse_duration, DurationParseError};

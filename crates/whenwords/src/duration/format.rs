//! Human-readable duration rendering
//!
//! Decomposes a seconds count into a greedy largest-unit-first breakdown.
//! Months and years use fixed nominal lengths (30 and 365 days).

use thiserror::Error;

/// Error type for duration rendering
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DurationFormatError {
    #[error("invalid seconds: {0} (must be non-negative and finite)")]
    InvalidInput(f64),
}

const DEFAULT_MAX_UNITS: usize = 2;

/// Options for duration rendering
///
/// `compact` switches from `"2 hours, 30 minutes"` to `"2h 30m"`;
/// `max_units` caps how many units appear in the breakdown. A `max_units`
/// of zero falls back to the default of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DurationFormatOptions {
    /// Render abbreviated unit suffixes instead of full words
    pub compact: bool,

    /// Maximum number of units in the breakdown (0 = default of 2)
    pub max_units: usize,
}

impl Default for DurationFormatOptions {
    fn default() -> Self {
        Self { compact: false, max_units: DEFAULT_MAX_UNITS }
    }
}

impl DurationFormatOptions {
    /// Create options with the defaults (verbose, two units)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compact rendering
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set the maximum number of units in the breakdown
    #[must_use]
    pub fn max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}

struct UnitSpec {
    name: &'static str,
    abbrev: &'static str,
    seconds: f64,
}

/// Walked largest-first; nominal 365-day years and 30-day months.
const UNITS: [UnitSpec; 6] = [
    UnitSpec { name: "year", abbrev: "y", seconds: 31_536_000.0 },
    UnitSpec { name: "month", abbrev: "mo", seconds: 2_592_000.0 },
    UnitSpec { name: "day", abbrev: "d", seconds: 86_400.0 },
    UnitSpec { name: "hour", abbrev: "h", seconds: 3_600.0 },
    UnitSpec { name: "minute", abbrev: "m", seconds: 60.0 },
    UnitSpec { name: "second", abbrev: "s", seconds: 1.0 },
];

/// Render a seconds count as a human-readable duration
///
/// Walks the unit list from years down to seconds, taking the floor of
/// the remaining value at each step. Units with a zero count are skipped;
/// rendering stops after `max_units` parts.
///
/// # Errors
///
/// Returns [`DurationFormatError::InvalidInput`] when `seconds` is
/// negative, NaN, or infinite.
///
/// # Examples
///
/// ```
/// use whenwords::{format_duration, DurationFormatOptions};
///
/// let opts = DurationFormatOptions::default();
/// assert_eq!(format_duration(93_600.0, &opts).unwrap(), "1 day, 2 hours");
///
/// let compact = DurationFormatOptions::new().compact(true);
/// assert_eq!(format_duration(3_661.0, &compact).unwrap(), "1h 1m");
/// ```
pub fn format_duration(
    seconds: f64,
    options: &DurationFormatOptions,
) -> Result<String, DurationFormatError> {
    if seconds < 0.0 || !seconds.is_finite() {
        return Err(DurationFormatError::InvalidInput(seconds));
    }

    let max_units =
        if options.max_units == 0 { DEFAULT_MAX_UNITS } else { options.max_units };

    if seconds == 0.0 {
        let rendered = if options.compact { "0s" } else { "0 seconds" };
        return Ok(rendered.to_string());
    }

    let mut remaining = seconds;
    let mut parts = Vec::new();

    for unit in &UNITS {
        if remaining < unit.seconds {
            continue;
        }

        let count = (remaining / unit.seconds).floor();
        remaining %= unit.seconds;

        if options.compact {
            parts.push(format!("{count:.0}{}", unit.abbrev));
        } else {
            let plural = if count == 1.0 { "" } else { "s" };
            parts.push(format!("{count:.0} {}{plural}", unit.name));
        }

        if parts.len() >= max_units {
            break;
        }
    }

    let separator = if options.compact { " " } else { ", " };
    Ok(parts.join(separator))
}

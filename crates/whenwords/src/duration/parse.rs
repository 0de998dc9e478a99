//! Duration parsing from human-written strings
//!
//! Accepts free text ("1 day, 2 hours, and 30 minutes"), compact suffixes
//! ("1d 2h 30m"), and colon notation ("2:30", "1:30:45"). Totals are
//! truncated toward zero to whole seconds.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Error type for duration parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration string")]
    EmptyInput,

    #[error("no parseable units found in {0:?}")]
    NoUnitsFound(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("negative durations are not allowed")]
    NegativeDuration,
}

/// Colon notation: H:MM or H:MM:SS, anchored to the whole string. The
/// minute and second fields accept any digit run, so "1:90" is 1 hour
/// and 90 minutes.
static COLON_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d+)(?::(\d+))?$").expect("COLON_FORM should compile - this is a bug")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE should compile - this is a bug"));

/// A signed decimal number followed by a unit token. Signs are accepted
/// here and rejected afterward so "-5 hours" fails as a negative duration
/// rather than as prose.
static NUMBER_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-z]+)")
        .expect("NUMBER_UNIT should compile - this is a bug")
});

/// Parse a human-written duration string into whole seconds
///
/// Colon notation is checked against the trimmed input before any other
/// normalization and short-circuits the free-text scan. Free text is
/// lowercased, whitespace-collapsed, and stripped of commas and the word
/// "and" before every number+unit term is accumulated.
///
/// Unit tokens: `s`/`sec`/`secs`/`second`/`seconds`,
/// `m`/`min`/`mins`/`minute`/`minutes`, `h`/`hr`/`hrs`/`hour`/`hours`,
/// `d`/`day`/`days`, `w`/`wk`/`wks`/`week`/`weeks`. There is no month
/// token: `m` always means minutes.
///
/// # Errors
///
/// See [`DurationParseError`]; every failure is reported to the caller,
/// nothing is partially accumulated.
///
/// # Examples
///
/// ```
/// use whenwords::parse_duration;
///
/// assert_eq!(parse_duration("2h 30m").unwrap(), 9_000);
/// assert_eq!(parse_duration("1 day, 2 hours, and 30 minutes").unwrap(), 95_400);
/// assert_eq!(parse_duration("2:30").unwrap(), 9_000);
/// ```
pub fn parse_duration(text: &str) -> Result<i64, DurationParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    if let Some(caps) = COLON_FORM.captures(trimmed) {
        return parse_colon_form(&caps);
    }

    let normalized = normalize(trimmed);

    let mut total = 0.0_f64;
    let mut matched = false;

    for caps in NUMBER_UNIT.captures_iter(&normalized) {
        matched = true;

        let number = &caps[1];
        let value: f64 = number
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;
        if value < 0.0 {
            return Err(DurationParseError::NegativeDuration);
        }

        total += value * unit_multiplier(&caps[2])?;
    }

    if !matched {
        return Err(DurationParseError::NoUnitsFound(trimmed.to_string()));
    }
    if total < 0.0 {
        return Err(DurationParseError::NegativeDuration);
    }

    Ok(total as i64)
}

/// Lowercase, collapse whitespace runs, turn commas into spaces, and drop
/// the connective "and".
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE.replace_all(&lowered, " ");
    collapsed.replace(',', " ").replace(" and ", " ").trim().to_string()
}

fn parse_colon_form(caps: &regex::Captures<'_>) -> Result<i64, DurationParseError> {
    let hours = parse_field(&caps[1])?;
    let minutes = parse_field(&caps[2])?;
    let seconds = match caps.get(3) {
        Some(field) => parse_field(field.as_str())?,
        None => 0,
    };

    let total = hours
        .saturating_mul(3_600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds);
    // Unreachable with digit-only fields and saturating arithmetic; kept so
    // the colon branch rejects negatives the same way the free-text scan
    // does.
    if total < 0 {
        return Err(DurationParseError::NegativeDuration);
    }
    Ok(total)
}

fn parse_field(digits: &str) -> Result<i64, DurationParseError> {
    digits.parse::<i64>().map_err(|_| DurationParseError::InvalidNumber(digits.to_string()))
}

fn unit_multiplier(unit: &str) -> Result<f64, DurationParseError> {
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Ok(1.0),
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(60.0),
        "h" | "hr" | "hrs" | "hour" | "hours" => Ok(3_600.0),
        "d" | "day" | "days" => Ok(86_400.0),
        "w" | "wk" | "wks" | "week" | "weeks" => Ok(604_800.0),
        other => Err(DurationParseError::UnknownUnit(other.to_string())),
    }
}

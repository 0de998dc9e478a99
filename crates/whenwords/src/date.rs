//! Contextual date labels and date-range abbreviation
//!
//! Unlike the relative-time and duration modules, everything here uses
//! exact calendar arithmetic on whole UTC dates.

use chrono::Datelike;

use crate::calendar::{date_of, month_name, weekday_name};

/// Label `subject` relative to `reference`, both UTC epoch seconds.
///
/// The time-of-day component of both arguments is discarded; decisions
/// are made midnight-to-midnight, so a subject late in the evening and a
/// reference early the next morning are still one calendar day apart.
///
/// First matching rule wins: same date → `"Today"`; one day off →
/// `"Yesterday"`/`"Tomorrow"`; two to six days off → `"Last <Weekday>"`/
/// `"This <Weekday>"`; same year → `"March 1"`; otherwise
/// `"January 1, 2023"`.
///
/// # Examples
///
/// ```
/// use whenwords::label_date;
///
/// // Reference: Monday 2024-01-15 (UTC)
/// assert_eq!(label_date(1_705_276_800, 1_705_276_800), "Today");
/// assert_eq!(label_date(1_705_017_600, 1_705_276_800), "Last Friday");
/// assert_eq!(label_date(1_709_251_200, 1_705_276_800), "March 1");
/// ```
pub fn label_date(subject: i64, reference: i64) -> String {
    let date = date_of(subject);
    let anchor = date_of(reference);

    if date == anchor {
        return "Today".to_string();
    }

    match date.signed_duration_since(anchor).num_days() {
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        -6..=-2 => format!("Last {}", weekday_name(date)),
        2..=6 => format!("This {}", weekday_name(date)),
        _ if date.year() == anchor.year() => {
            format!("{} {}", month_name(date), date.day())
        }
        _ => format!("{} {}, {}", month_name(date), date.day(), date.year()),
    }
}

/// Format the date range between two UTC epoch seconds.
///
/// Argument order is not assumed; the earlier instant always leads.
/// Ranges inside one month render as `"January 15–22, 2024"`, inside one
/// year as `"January 15 – February 15, 2024"`, and across years with both
/// dates spelled out in full.
///
/// # Examples
///
/// ```
/// use whenwords::format_range;
///
/// assert_eq!(format_range(1_705_276_800, 1_705_881_600), "January 15–22, 2024");
/// // Swapped arguments produce the same range.
/// assert_eq!(format_range(1_705_881_600, 1_705_276_800), "January 15–22, 2024");
/// ```
pub fn format_range(start: i64, end: i64) -> String {
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let first = date_of(start);
    let last = date_of(end);

    if first == last {
        return format!("{} {}, {}", month_name(first), first.day(), first.year());
    }

    if first.year() == last.year() && first.month() == last.month() {
        return format!(
            "{} {}\u{2013}{}, {}",
            month_name(first),
            first.day(),
            last.day(),
            first.year()
        );
    }

    if first.year() == last.year() {
        return format!(
            "{} {} \u{2013} {} {}, {}",
            month_name(first),
            first.day(),
            month_name(last),
            last.day(),
            first.year()
        );
    }

    format!(
        "{} {}, {} \u{2013} {} {}, {}",
        month_name(first),
        first.day(),
        first.year(),
        month_name(last),
        last.day(),
        last.year()
    )
}

#[cfg(test)]
mod tests {
    //! Unit tests for date.
    use super::*;

    // Monday 2024-01-15T00:00:00Z
    const REF: i64 = 1_705_276_800;

    #[test]
    fn test_today_ignores_time_of_day() {
        assert_eq!(label_date(REF, REF), "Today");
        // Same date, 12 hours later.
        assert_eq!(label_date(REF + 43_200, REF), "Today");
    }

    #[test]
    fn test_yesterday_and_tomorrow() {
        assert_eq!(label_date(REF - 86_400, REF), "Yesterday");
        assert_eq!(label_date(REF + 86_400, REF), "Tomorrow");
    }

    /// Validates the weekday windows around the reference date.
    ///
    /// Assertions:
    /// - Confirms two to six days back produce `"Last <Weekday>"`.
    /// - Confirms two to six days ahead produce `"This <Weekday>"`.
    /// - Confirms seven days off falls out of the window into a plain
    ///   date.
    #[test]
    fn test_weekday_windows() {
        assert_eq!(label_date(REF - 2 * 86_400, REF), "Last Saturday");
        assert_eq!(label_date(REF - 3 * 86_400, REF), "Last Friday");
        assert_eq!(label_date(REF - 6 * 86_400, REF), "Last Tuesday");
        assert_eq!(label_date(REF - 7 * 86_400, REF), "January 8");

        assert_eq!(label_date(REF + 2 * 86_400, REF), "This Wednesday");
        assert_eq!(label_date(REF + 6 * 86_400, REF), "This Sunday");
        assert_eq!(label_date(REF + 7 * 86_400, REF), "January 22");
    }

    #[test]
    fn test_plain_dates() {
        assert_eq!(label_date(1_709_251_200, REF), "March 1");
        assert_eq!(label_date(1_735_603_200, REF), "December 31");
        assert_eq!(label_date(1_672_531_200, REF), "January 1, 2023");
        assert_eq!(label_date(1_736_121_600, REF), "January 6, 2025");
    }

    /// Validates the four range layouts.
    ///
    /// Assertions:
    /// - Confirms a same-day range collapses to a single full date.
    /// - Confirms same-month, same-year, and cross-year layouts.
    #[test]
    fn test_range_layouts() {
        assert_eq!(format_range(REF, REF), "January 15, 2024");
        assert_eq!(format_range(REF, REF + 86_400), "January 15–16, 2024");
        assert_eq!(format_range(REF, 1_707_955_200), "January 15 – February 15, 2024");
        assert_eq!(
            format_range(1_703_721_600, REF),
            "December 28, 2023 – January 15, 2024"
        );
    }

    #[test]
    fn test_range_swaps_arguments() {
        assert_eq!(format_range(1_705_881_600, REF), "January 15–22, 2024");
        assert_eq!(format_range(REF, 1_705_881_600), format_range(1_705_881_600, REF));
    }
}

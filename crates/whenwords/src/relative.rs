//! Relative-time phrasing ("3 hours ago", "in 2 days").
//!
//! Classifies the elapsed time between a subject timestamp and a reference
//! timestamp into a single count+unit phrase. Month and year buckets use
//! fixed nominal lengths (30 and 365 days); the calendar-exact logic lives
//! in [`crate::date`] instead.

/// How a bucket derives its count from the elapsed seconds.
#[derive(Debug, Clone, Copy)]
enum CountRule {
    /// The bucket always reports a count of one.
    One,
    /// Round the elapsed seconds to the nearest multiple of the step.
    Divide(i64),
    /// Like `Divide`, but the count never exceeds the cap.
    DivideCapped(i64, i64),
}

struct Bucket {
    /// Exclusive upper bound on elapsed seconds for this bucket.
    upper: i64,
    unit: &'static str,
    rule: CountRule,
}

/// Threshold table evaluated top to bottom; the first bucket whose upper
/// bound exceeds the elapsed seconds wins. Everything at or above the last
/// bound is reported in years.
const BUCKETS: [Bucket; 9] = [
    Bucket { upper: 90, unit: "minute", rule: CountRule::One },
    Bucket { upper: 2_700, unit: "minute", rule: CountRule::Divide(60) },
    Bucket { upper: 5_400, unit: "hour", rule: CountRule::One },
    Bucket { upper: 79_200, unit: "hour", rule: CountRule::Divide(3_600) },
    Bucket { upper: 129_600, unit: "day", rule: CountRule::One },
    Bucket { upper: 2_246_400, unit: "day", rule: CountRule::Divide(86_400) },
    Bucket { upper: 3_974_400, unit: "month", rule: CountRule::One },
    // Counts that would round to 11 months are reported as 10 so the
    // phrase never reads "11 months ago" right before "1 year ago".
    Bucket { upper: 27_648_000, unit: "month", rule: CountRule::DivideCapped(2_592_000, 10) },
    Bucket { upper: 47_347_200, unit: "year", rule: CountRule::One },
];

const SECONDS_PER_YEAR: i64 = 31_536_000;

/// Describe `subject` relative to `reference`, both UTC epoch seconds.
///
/// Differences under 45 seconds collapse to `"just now"` in either
/// direction; past subjects read `"<n> <unit> ago"` and future subjects
/// `"in <n> <unit>"`.
///
/// # Examples
///
/// ```
/// use whenwords::time_ago;
///
/// assert_eq!(time_ago(1_704_067_200, 1_704_067_200), "just now");
/// assert_eq!(time_ago(1_704_061_800, 1_704_067_200), "2 hours ago");
/// assert_eq!(time_ago(1_704_078_000, 1_704_067_200), "in 3 hours");
/// ```
pub fn time_ago(subject: i64, reference: i64) -> String {
    let diff = reference.saturating_sub(subject);
    let abs_diff = diff.saturating_abs();

    if abs_diff < 45 {
        return "just now".to_string();
    }

    let (count, unit) = classify(abs_diff);
    let plural = if count == 1 { "" } else { "s" };

    if diff > 0 {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

fn classify(abs_diff: i64) -> (i64, &'static str) {
    for bucket in &BUCKETS {
        if abs_diff < bucket.upper {
            let count = match bucket.rule {
                CountRule::One => 1,
                CountRule::Divide(step) => round_half_up(abs_diff, step),
                CountRule::DivideCapped(step, cap) => round_half_up(abs_diff, step).min(cap),
            };
            return (count, bucket.unit);
        }
    }
    (round_half_up(abs_diff, SECONDS_PER_YEAR), "year")
}

/// Integer division rounding halves upward. Inputs are positive; the
/// remainder doubling cannot overflow because steps stay well under
/// `i64::MAX / 2`.
fn round_half_up(value: i64, step: i64) -> i64 {
    let quotient = value / step;
    if (value % step) * 2 >= step {
        quotient + 1
    } else {
        quotient
    }
}

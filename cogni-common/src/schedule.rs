//! Spaced-repetition review scheduling
//!
//! A processed study material gets four review dates derived from a single
//! reference instant: +6 hours, +1 day, +3 days and +7 days, each truncated
//! down to the whole hour. Review dates are presentation strings of the form
//! `YYYY-MM-DD HH:00` once formatted for storage or the wire.

use chrono::{DateTime, Duration, DurationRound, Utc};

/// Number of review points generated per material
pub const REVIEW_STEP_COUNT: usize = 4;

/// Compute the four review instants for a material processed at `reference`.
///
/// Offsets are fixed (+6h, +1d, +3d, +7d) and each result is truncated to
/// the start of its hour, so scheduling is a pure function of the reference
/// instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cogni_common::schedule::{format_review_date, review_schedule};
///
/// let reference = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// let dates = review_schedule(reference);
/// assert_eq!(format_review_date(dates[0]), "2023-01-01 06:00");
/// assert_eq!(format_review_date(dates[3]), "2023-01-08 00:00");
/// ```
pub fn review_schedule(reference: DateTime<Utc>) -> [DateTime<Utc>; REVIEW_STEP_COUNT] {
    let offsets = [
        Duration::hours(6),
        Duration::days(1),
        Duration::days(3),
        Duration::days(7),
    ];
    offsets.map(|offset| truncate_to_hour(reference + offset))
}

/// Format a review instant as `YYYY-MM-DD HH:00` for storage and API output
pub fn format_review_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:00").to_string()
}

fn truncate_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    // duration_trunc only fails for timestamps near the representable limits
    instant
        .duration_trunc(Duration::hours(1))
        .unwrap_or(instant)
}

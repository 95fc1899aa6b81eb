//! crates/logging/src/timestamp.rs
//! Timestamp segment rendering for the configured precision.

use chrono::{NaiveDateTime, Timelike};

use crate::TimePrecision;

/// Renders the timestamp segment for `instant` at the given precision.
///
/// The result is a pure function of its inputs: [`TimePrecision::None`]
/// yields an empty string (no brackets), the other precisions yield a
/// bracketed clock reading followed by a single space. Milliseconds are
/// always zero-padded to three digits.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use logging::{TimePrecision, render_timestamp};
///
/// let instant = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_milli_opt(14, 5, 9, 7)
///     .unwrap();
///
/// assert_eq!(render_timestamp(TimePrecision::Full, &instant), "[14:05:09.007] ");
/// ```
#[must_use]
pub fn render_timestamp(precision: TimePrecision, instant: &NaiveDateTime) -> String {
    match precision {
        TimePrecision::None => String::new(),
        TimePrecision::Partial => format!("[{}] ", instant.format("%H:%M")),
        TimePrecision::Precise => format!("[{}] ", instant.format("%H:%M:%S")),
        TimePrecision::Full => {
            // Leap-second nanoseconds exceed one second; keep the sub-second
            // remainder so the field stays three digits wide.
            let millis = (instant.nanosecond() % 1_000_000_000) / 1_000_000;
            format!("[{}.{millis:03}] ", instant.format("%H:%M:%S"))
        }
    }
}

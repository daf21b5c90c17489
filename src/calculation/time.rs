//! Pure date and time utilities.
//!
//! Clock times arrive as `HH:MM` or `HH:MM:SS` strings from device feeds
//! and entry forms. Shift durations are computed in minutes since
//! midnight; a checkout earlier than the check-in means the shift crossed
//! midnight and gains a day.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a `HH:MM` or `HH:MM:SS` string into minutes since midnight.
///
/// Seconds are ignored. Returns `None` for anything that does not parse
/// into a valid time of day.
fn minutes_since_midnight(value: &str) -> Option<i64> {
    let mut parts = value.trim().split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    if let Some(seconds) = parts.next() {
        let _: i64 = seconds.parse().ok()?;
    }
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Calculates the hours worked between two clock times.
///
/// If the checkout is earlier than the check-in the shift crossed
/// midnight: a night shift of 19:00 to 08:00 yields 13 hours. A missing
/// or malformed time yields 0. The result is floored at zero and rounded
/// to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hours_worked;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_worked("09:00", "17:00"), Decimal::new(8, 0));
/// assert_eq!(hours_worked("19:00", "08:00"), Decimal::new(13, 0));
/// assert_eq!(hours_worked("", "17:00"), Decimal::ZERO);
/// ```
pub fn hours_worked(check_in: &str, check_out: &str) -> Decimal {
    let (Some(start), Some(mut end)) = (
        minutes_since_midnight(check_in),
        minutes_since_midnight(check_out),
    ) else {
        return Decimal::ZERO;
    };

    if end < start {
        end += MINUTES_PER_DAY;
    }

    let minutes = (end - start).max(0);
    (Decimal::new(minutes, 0) / Decimal::new(60, 0)).round_dp(2)
}

/// Formats a date as `YYYY-MM-DD` from its local calendar fields.
///
/// Used everywhere a date crosses a serialization boundary so that no
/// timezone conversion can shift the day.
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Returns the first and last calendar date of the given month, or `None`
/// for an invalid month number.
pub fn month_bounds(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

/// Returns the calendar day count of the given month.
///
/// This is the fallback when no business-calendar entry exists; an
/// invalid month number degrades to 30 days rather than failing the
/// calculation.
pub fn calendar_days_in_month(month: u32, year: i32) -> u32 {
    month_bounds(month, year)
        .map(|(_, last)| last.day())
        .unwrap_or(30)
}

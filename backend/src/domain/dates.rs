//! Date arithmetic shared by the three trackers.
//!
//! Every function here operates on `NaiveDate` values only: there is no
//! time-of-day or timezone component, so equal dates always differ by zero
//! days and adding days never shifts across a DST boundary.

use chrono::{Duration, NaiveDate};
use shared::Countdown;

/// Average month length used to convert elapsed days into months
pub const AVERAGE_MONTH_DAYS: f64 = 30.44;

/// Absolute whole-day difference between two dates
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Signed day difference, positive when `target` lies after `today`
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Shift `date` by `days`, saturating at the ends of the representable range
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks.saturating_mul(7))
}

/// Whole weeks elapsed from `from` to `to`, rounded towards negative infinity
pub fn weeks_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().div_euclid(7)
}

/// Age in months as `floor(days / 30.44)`.
///
/// This is a deterministic approximation rather than a calendar-month count:
/// a child born on Jan 1st is 5 months old on Jul 1st (182 days).
pub fn age_in_months(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let days = days_between(birth_date, as_of) as f64;
    (days / AVERAGE_MONTH_DAYS).floor() as u32
}

/// Countdown from `today` to `target`; zero or negative distances are `Passed`
pub fn countdown(today: NaiveDate, target: NaiveDate) -> Countdown {
    let days = days_until(today, target);
    if days > 0 {
        Countdown::Remaining {
            days: u32::try_from(days).unwrap_or(u32::MAX),
        }
    } else {
        Countdown::Passed
    }
}

/// Parse an ISO 8601 calendar date written exactly as `YYYY-MM-DD`.
///
/// Signed or extended years (`+262142-12-20`) are rejected even though
/// chrono's `%Y` would accept them.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

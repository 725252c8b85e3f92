//! Transaction date and time quoted inside a message.
//!
//! These are informational only. The time a record is stored under is
//! assigned by the router when the message is captured.

use chrono::{Month, NaiveDate, NaiveTime};
use regex::Captures;

use super::patterns::{NAMED_MONTH_DATE_PATTERN, NUMERIC_DATE_PATTERN, TIME_PATTERN};

/// Extract the first valid `DD/MM/YY(YY)` or `DD-Mon-YY(YY)` date.
///
/// Two-digit years are read as 20YY. Dates that do not exist on the
/// calendar (31/02/24) are skipped.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    NUMERIC_DATE_PATTERN
        .captures_iter(text)
        .find_map(|caps| {
            let month = caps[2].parse().ok()?;
            build_date(&caps, month)
        })
        .or_else(|| {
            NAMED_MONTH_DATE_PATTERN.captures_iter(text).find_map(|caps| {
                let month = caps[2].parse::<Month>().ok()?;
                build_date(&caps, month.number_from_month())
            })
        })
}

/// Extract the first valid `HH:MM` clock time.
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    TIME_PATTERN.captures_iter(text).find_map(|caps| {
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    })
}

fn build_date(caps: &Captures<'_>, month: u32) -> Option<NaiveDate> {
    let day = caps[1].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

//! Year-relative arithmetic on wall-clock date-times.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::CalendarError;

/// Returns midnight on January 1 of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside the range
/// supported by `chrono`.
pub fn year_start(year: i32) -> Result<NaiveDateTime, CalendarError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(CalendarError::YearOutOfRange {
            year: i64::from(year),
        })
}

/// Returns the milliseconds elapsed between the start of `dt`'s calendar
/// year and `dt`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the start of the year is not
/// representable (only possible at the very first year `chrono` supports).
pub fn elapsed_in_year(dt: NaiveDateTime) -> Result<i64, CalendarError> {
    let start = year_start(dt.year())?;
    Ok((dt - start).num_milliseconds())
}

/// Shifts `dt` by `millis` milliseconds (negative values shift backward),
/// rolling over days, months and years as needed.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the result is not
/// representable.
pub fn shift_millis(dt: NaiveDateTime, millis: i64) -> Result<NaiveDateTime, CalendarError> {
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| dt.checked_add_signed(delta))
        .ok_or_else(|| CalendarError::DateOutOfRange {
            date: dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            millis,
        })
}

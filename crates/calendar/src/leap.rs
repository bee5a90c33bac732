//! Gregorian leap-year rule.

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year if it is divisible by 4 and either not divisible
/// by 100 or divisible by 400. Year 0 is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the length of the Gregorian `year` in milliseconds.
pub fn gregorian_year_millis(year: i32) -> i64 {
    i64::from(days_in_year(year)) * MILLIS_PER_DAY
}

/// Counts the leap years in `[0, year)`.
///
/// Returns 0 when `year <= 0`.
pub fn leap_years_before(year: i32) -> i64 {
    if year <= 0 {
        return 0;
    }
    let last = i64::from(year) - 1;
    // +1 for year 0 itself, which the quotients below do not count.
    last / 4 - last / 100 + last / 400 + 1
}

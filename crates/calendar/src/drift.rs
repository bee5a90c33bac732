//! Cumulative drift between the Gregorian and the sidereal calendar.
//!
//! A common Gregorian year is about 6 hours shorter than the sidereal year
//! and a leap year about 18 hours longer, so the calendar slowly falls
//! behind the sidereal count. Converting with the sidereal model shifts
//! dates by the drift accumulated since year 0.

use crate::leap::{MILLIS_PER_DAY, leap_years_before};
use crate::model::SIDEREAL_YEAR_MILLIS;

const COMMON_DRIFT_MILLIS: i64 = 365 * MILLIS_PER_DAY - SIDEREAL_YEAR_MILLIS;
const LEAP_DRIFT_MILLIS: i64 = 366 * MILLIS_PER_DAY - SIDEREAL_YEAR_MILLIS;

/// Returns the Gregorian-minus-sidereal drift accumulated over the years
/// `[0, year)`, in milliseconds.
///
/// The result is negative for every positive `year` (the Gregorian calendar
/// is, on average, shorter than the sidereal year) and zero when
/// `year <= 0`.
///
/// # Example
///
/// ```
/// use imperial_calendar::sidereal_drift_millis;
///
/// // One leap year (year 0): 24h - 6h 9m 9.76s
/// assert_eq!(sidereal_drift_millis(1), 64_250_240);
/// ```
pub fn sidereal_drift_millis(year: i32) -> i64 {
    if year <= 0 {
        return 0;
    }
    let leaps = leap_years_before(year);
    let commons = i64::from(year) - leaps;
    commons * COMMON_DRIFT_MILLIS + leaps * LEAP_DRIFT_MILLIS
}

/// Returns [`sidereal_drift_millis`] expressed in hours.
pub fn sidereal_drift_hours(year: i32) -> f64 {
    sidereal_drift_millis(year) as f64 / 3_600_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap::is_leap_year;
    use crate::model::SIDEREAL_YEAR_HOURS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn per_year_constants() {
        assert_eq!(COMMON_DRIFT_MILLIS, -22_149_760);
        assert_eq!(LEAP_DRIFT_MILLIS, 64_250_240);
    }

    #[test]
    fn empty_range() {
        assert_eq!(sidereal_drift_millis(0), 0);
        assert_eq!(sidereal_drift_millis(-5), 0);
    }

    #[test]
    fn two_thousand_years() {
        assert_eq!(sidereal_drift_millis(2000), -2_395_520_000);
        assert_abs_diff_eq!(sidereal_drift_hours(2000), -665.422_222, epsilon = 1e-6);
    }

    #[test]
    fn matches_hourly_accumulation() {
        // Straight summation of (gregorian hours - sidereal hours) per year.
        for end in [1, 4, 100, 401, 1234, 2024] {
            let summed: f64 = (0..end)
                .map(|y| {
                    let days = if is_leap_year(y) { 366.0 } else { 365.0 };
                    days * 24.0 - SIDEREAL_YEAR_HOURS
                })
                .sum();
            assert_abs_diff_eq!(sidereal_drift_hours(end), summed, epsilon = 1e-6);
        }
    }
}

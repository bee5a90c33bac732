//! Year-length models.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CalendarError;
use crate::leap::gregorian_year_millis;

/// Length of the sidereal year (365 d 6 h 9 m 9.76 s) in milliseconds.
pub const SIDEREAL_YEAR_MILLIS: i64 = (((365 * 24 + 6) * 60 + 9) * 60) * 1000 + 9_760;

/// Length of the sidereal year in hours.
pub const SIDEREAL_YEAR_HOURS: f64 = SIDEREAL_YEAR_MILLIS as f64 / MILLIS_PER_HOUR;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Selects which year length divides the year into per-mille slices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearModel {
    /// Gregorian calendar year: 365 or 366 days depending on the leap rule.
    #[default]
    Simple,
    /// Fixed astronomical year of 365 d 6 h 9 m 9.76 s, independent of
    /// leap years.
    Sidereal,
}

impl YearModel {
    /// Returns the length of `year` under this model, in milliseconds.
    pub fn length_millis(self, year: i32) -> i64 {
        match self {
            Self::Simple => gregorian_year_millis(year),
            Self::Sidereal => SIDEREAL_YEAR_MILLIS,
        }
    }

    /// Returns the length of `year` under this model, in hours.
    pub fn length_hours(self, year: i32) -> f64 {
        self.length_millis(year) as f64 / MILLIS_PER_HOUR
    }

    /// Returns `true` for [`YearModel::Sidereal`].
    pub fn is_sidereal(self) -> bool {
        matches!(self, Self::Sidereal)
    }
}

impl fmt::Display for YearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Sidereal => f.write_str("sidereal"),
        }
    }
}

impl FromStr for YearModel {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "sidereal" => Ok(Self::Sidereal),
            _ => Err(CalendarError::UnknownYearModel {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sidereal_constant() {
        assert_eq!(SIDEREAL_YEAR_MILLIS, 31_558_149_760);
        assert_abs_diff_eq!(
            SIDEREAL_YEAR_HOURS,
            365.0 * 24.0 + 6.0 + 9.0 / 60.0 + 9.76 / 3600.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn simple_follows_leap_rule() {
        assert_eq!(YearModel::Simple.length_millis(2023), 365 * 86_400_000);
        assert_eq!(YearModel::Simple.length_millis(2024), 366 * 86_400_000);
        assert_abs_diff_eq!(YearModel::Simple.length_hours(2024), 8784.0);
    }

    #[test]
    fn sidereal_ignores_leap_rule() {
        assert_eq!(
            YearModel::Sidereal.length_millis(2023),
            YearModel::Sidereal.length_millis(2024)
        );
    }

    #[test]
    fn default_is_simple() {
        assert_eq!(YearModel::default(), YearModel::Simple);
        assert!(!YearModel::default().is_sidereal());
    }

    #[test]
    fn parse_names() {
        assert_eq!("simple".parse::<YearModel>().unwrap(), YearModel::Simple);
        assert_eq!(" Sidereal ".parse::<YearModel>().unwrap(), YearModel::Sidereal);
        assert_eq!(
            "julian".parse::<YearModel>().unwrap_err(),
            CalendarError::UnknownYearModel {
                name: "julian".to_string()
            }
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for model in [YearModel::Simple, YearModel::Sidereal] {
            assert_eq!(model.to_string().parse::<YearModel>().unwrap(), model);
        }
    }
}

//! The imperial date value and its string layouts.

use std::fmt;
use std::str::FromStr;

use imperial_calendar::CalendarError;

use crate::check::CheckNumber;
use crate::error::ImperialError;

/// Number of digits before the millennium marker (`C`, `YYY`, `MMM`).
const FIXED_DIGITS: usize = 7;

/// Whitespace layout of a rendered imperial date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `C YYY MMM.Mn`
    #[default]
    Spaced,
    /// `CYYYMMM.Mn`
    Compact,
}

impl Layout {
    /// Maps a `compact` flag onto a layout.
    pub fn from_compact(compact: bool) -> Self {
        if compact { Self::Compact } else { Self::Spaced }
    }
}

/// An imperial date: check number, year fraction, year within the
/// millennium and millennium.
///
/// # Example
///
/// ```
/// use imperial_dating::{ImperialDate, Layout};
///
/// let date: ImperialDate = "5 001 000.M2".parse().unwrap();
/// assert_eq!(date.year().unwrap(), 2000);
/// assert_eq!(date.render(Layout::Compact), "5001000.M2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImperialDate {
    check: CheckNumber,
    year_fraction: u16,
    year_of_millennium: u16,
    millennium: u32,
}

impl ImperialDate {
    /// Creates an imperial date from its components.
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::InvalidParameter`] if `year_fraction` or
    /// `year_of_millennium` exceeds 999.
    pub fn new(
        check: CheckNumber,
        year_fraction: u16,
        year_of_millennium: u16,
        millennium: u32,
    ) -> Result<Self, ImperialError> {
        if year_fraction > 999 {
            return Err(ImperialError::InvalidParameter {
                name: "year fraction",
                value: year_fraction.to_string(),
            });
        }
        if year_of_millennium > 999 {
            return Err(ImperialError::InvalidParameter {
                name: "year of millennium",
                value: year_of_millennium.to_string(),
            });
        }
        Ok(Self {
            check,
            year_fraction,
            year_of_millennium,
            millennium,
        })
    }

    /// Creates an imperial date for a calendar `year` and a per-mille
    /// `year_fraction`.
    ///
    /// Years that are exact multiples of 1000 stay in the lower millennium
    /// with a year-of-millennium of `000` (2000 is `000.M2`, 2001 is
    /// `001.M3`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for negative years and
    /// [`ImperialError::InvalidParameter`] if `year_fraction` exceeds 999.
    pub fn from_year(
        check: CheckNumber,
        year: i32,
        year_fraction: u16,
    ) -> Result<Self, ImperialError> {
        if year < 0 {
            return Err(CalendarError::YearOutOfRange {
                year: i64::from(year),
            }
            .into());
        }
        let year_of_millennium = (year % 1000) as u16;
        let millennium = (year / 1000) as u32 + u32::from(year_of_millennium != 0);
        Self::new(check, year_fraction, year_of_millennium, millennium)
    }

    /// Returns the check number.
    pub fn check(&self) -> CheckNumber {
        self.check
    }

    /// Returns the per-mille year fraction (0..=999).
    pub fn year_fraction(&self) -> u16 {
        self.year_fraction
    }

    /// Returns the year within the millennium (0..=999).
    pub fn year_of_millennium(&self) -> u16 {
        self.year_of_millennium
    }

    /// Returns the millennium number.
    pub fn millennium(&self) -> u32 {
        self.millennium
    }

    /// Returns the calendar year this date falls in.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the components describe a
    /// negative year (e.g. `.M0` with a non-zero year of millennium) or one
    /// beyond `i32`.
    pub fn year(&self) -> Result<i32, ImperialError> {
        let mut index = i64::from(self.millennium) - 1;
        if self.year_of_millennium == 0 {
            index += 1;
        }
        let year = index * 1000 + i64::from(self.year_of_millennium);
        if year < 0 {
            return Err(CalendarError::YearOutOfRange { year }.into());
        }
        i32::try_from(year).map_err(|_| CalendarError::YearOutOfRange { year }.into())
    }

    /// Renders the date in the given layout.
    pub fn render(&self, layout: Layout) -> String {
        match layout {
            Layout::Spaced => self.to_string(),
            Layout::Compact => format!(
                "{}{:03}{:03}.M{}",
                self.check, self.year_fraction, self.year_of_millennium, self.millennium
            ),
        }
    }
}

impl fmt::Display for ImperialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:03} {:03}.M{}",
            self.check, self.year_fraction, self.year_of_millennium, self.millennium
        )
    }
}

/// Strips surrounding whitespace, interior spaces and periods.
fn normalize(s: &str) -> String {
    s.trim().chars().filter(|&c| c != ' ' && c != '.').collect()
}

impl FromStr for ImperialDate {
    type Err = ImperialError;

    /// Parses either layout. All spaces and periods are ignored; what remains
    /// must be seven digits, `M`, and one or more digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ImperialError::MalformedImperial {
            input: s.to_string(),
        };

        let normalized = normalize(s);
        let bytes = normalized.as_bytes();
        if bytes.len() < FIXED_DIGITS + 2 || bytes[FIXED_DIGITS] != b'M' {
            return Err(malformed());
        }
        let (fixed, millennium) = (&normalized[..FIXED_DIGITS], &normalized[FIXED_DIGITS + 1..]);
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(fixed) || !all_digits(millennium) {
            return Err(malformed());
        }

        let digit = |i: usize| u16::from(bytes[i] - b'0');
        let check = CheckNumber::from(bytes[0] - b'0');
        let year_fraction = digit(1) * 100 + digit(2) * 10 + digit(3);
        let year_of_millennium = digit(4) * 100 + digit(5) * 10 + digit(6);
        let millennium = millennium
            .parse::<u32>()
            .map_err(|_| ImperialError::MillenniumOutOfRange {
                digits: millennium.to_string(),
            })?;

        Self::new(check, year_fraction, year_of_millennium, millennium)
    }
}

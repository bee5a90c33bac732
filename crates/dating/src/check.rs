//! Check number newtype.

use std::fmt;
use std::str::FromStr;

use crate::error::ImperialError;

/// Single-digit check number (0..=9) leading an imperial date.
///
/// The digit carries no computed meaning; it is supplied by the caller and
/// clamped into range rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckNumber(u8);

impl CheckNumber {
    /// Largest check number.
    pub const MAX: Self = Self(9);

    /// Creates a check number, clamping `value` into 0..=9.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 9) as u8)
    }

    /// Returns the digit.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<f64> for CheckNumber {
    type Error = ImperialError;

    /// Clamps `value` into 0..=9, truncating any fractional part.
    ///
    /// Fails only for NaN.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(ImperialError::InvalidParameter {
                name: "check number",
                value: value.to_string(),
            });
        }
        Ok(Self(value.clamp(0.0, 9.0).trunc() as u8))
    }
}

impl From<u8> for CheckNumber {
    fn from(value: u8) -> Self {
        Self(value.min(9))
    }
}

impl From<i32> for CheckNumber {
    fn from(value: i32) -> Self {
        Self::clamped(i64::from(value))
    }
}

impl FromStr for CheckNumber {
    type Err = ImperialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ImperialError::InvalidParameter {
            name: "check number",
            value: s.to_string(),
        };
        let value: f64 = s.trim().parse().map_err(|_| invalid())?;
        Self::try_from(value).map_err(|_| invalid())
    }
}

impl fmt::Display for CheckNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

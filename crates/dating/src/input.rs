//! Modern date inputs accepted by the forward converter.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::ImperialError;

/// How integer timestamps are scaled before use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    /// Values with exactly 10 decimal digits are seconds, everything else
    /// is milliseconds.
    ///
    /// Misreads millisecond timestamps from 1970-01-12 to 1970-04-26 and
    /// second timestamps outside 2001-09-09 to 2286-11-20.
    #[default]
    Auto,
    /// Seconds since the Unix epoch.
    Seconds,
    /// Milliseconds since the Unix epoch.
    Milliseconds,
}

impl TimestampUnit {
    /// Scales `value` to milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::TimestampOutOfRange`] if scaling overflows.
    pub fn to_millis(self, value: i64) -> Result<i64, ImperialError> {
        let seconds = match self {
            Self::Auto => decimal_digits(value) == 10,
            Self::Seconds => true,
            Self::Milliseconds => false,
        };
        if seconds {
            value
                .checked_mul(1000)
                .ok_or(ImperialError::TimestampOutOfRange { millis: value })
        } else {
            Ok(value)
        }
    }
}

fn decimal_digits(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

/// A modern date or timestamp to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModernInput {
    /// An instant in UTC.
    DateTime(DateTime<Utc>),
    /// Wall-clock time in the converter's reference offset.
    Naive(NaiveDateTime),
    /// An integer timestamp, scaled according to [`TimestampUnit`].
    Timestamp(i64),
    /// Text holding a timestamp; a fractional part is truncated.
    Text(String),
}

impl ModernInput {
    /// Resolves the input to wall-clock time in `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ImperialError::UnrecognizedInput`] for text that is not a
    /// number and [`ImperialError::TimestampOutOfRange`] for timestamps that
    /// do not map to a representable date.
    pub fn resolve(
        &self,
        unit: TimestampUnit,
        offset: FixedOffset,
    ) -> Result<NaiveDateTime, ImperialError> {
        let utc = match self {
            Self::DateTime(dt) => *dt,
            Self::Naive(naive) => return Ok(*naive),
            Self::Timestamp(value) => from_timestamp(*value, unit)?,
            Self::Text(text) => {
                let value = parse_timestamp(text).ok_or_else(|| ImperialError::UnrecognizedInput {
                    input: text.clone(),
                })?;
                from_timestamp(value, unit)?
            }
        };
        Ok(utc.with_timezone(&offset).naive_local())
    }
}

/// Parses numeric text, truncating any fractional part toward zero.
fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?.trunc();
    (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
        .then_some(value as i64)
}

fn from_timestamp(value: i64, unit: TimestampUnit) -> Result<DateTime<Utc>, ImperialError> {
    let millis = unit.to_millis(value)?;
    DateTime::from_timestamp_millis(millis).ok_or(ImperialError::TimestampOutOfRange { millis })
}

impl From<DateTime<Utc>> for ModernInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for ModernInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for ModernInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<i64> for ModernInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for ModernInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ModernInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

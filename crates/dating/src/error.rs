//! Error types for the imperial-dating crate.

use imperial_calendar::CalendarError;

/// Broad failure category of an [`ImperialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value being converted could not be understood or represented.
    MalformedInput,
    /// A conversion parameter had the wrong type or an unusable value.
    InvalidParameter,
}

/// Error type for all fallible operations in the imperial-dating crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImperialError {
    /// Returned when a modern input is neither a date nor an integer timestamp.
    #[error("unrecognized date input: {input:?}")]
    UnrecognizedInput {
        /// The input as it was provided.
        input: String,
    },

    /// Returned when a timestamp does not map to a representable date.
    #[error("timestamp out of range: {millis} ms")]
    TimestampOutOfRange {
        /// The timestamp in milliseconds (after unit scaling).
        millis: i64,
    },

    /// Returned when a string does not have the `C YYY MMM.Mn` shape.
    #[error("malformed imperial date: {input:?}")]
    MalformedImperial {
        /// The string as it was provided.
        input: String,
    },

    /// Returned when the millennium digits do not fit the supported range.
    #[error("millennium out of range: {digits}")]
    MillenniumOutOfRange {
        /// The millennium digits that were provided.
        digits: String,
    },

    /// Returned when a calendar computation fails.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a conversion parameter is not usable.
    #[error("invalid {name}: {value:?}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Returned when a configuration document cannot be deserialized.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ImperialError {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } | Self::InvalidConfig(_) => ErrorKind::InvalidParameter,
            Self::Calendar(CalendarError::UnknownYearModel { .. }) => ErrorKind::InvalidParameter,
            Self::UnrecognizedInput { .. }
            | Self::TimestampOutOfRange { .. }
            | Self::MalformedImperial { .. }
            | Self::MillenniumOutOfRange { .. }
            | Self::Calendar(_) => ErrorKind::MalformedInput,
        }
    }
}

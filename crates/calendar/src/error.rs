//! Error types for the imperial-calendar crate.

/// Error type for all fallible operations in the imperial-calendar crate.
///
/// Covers unknown year-model names and values that fall outside what the
/// calendar arithmetic (backed by `chrono`) can represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year-model name is neither `simple` nor `sidereal`.
    #[error("unknown year model: {name:?} (expected \"simple\" or \"sidereal\")")]
    UnknownYearModel {
        /// The name that was provided.
        name: String,
    },

    /// Returned when a year cannot be used as a calendar year.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// Returned when shifting a date would leave the representable range.
    #[error("date out of range: shifting {date} by {millis} ms")]
    DateOutOfRange {
        /// The date that was being shifted, ISO 8601 formatted.
        date: String,
        /// The requested shift in milliseconds.
        millis: i64,
    },
}

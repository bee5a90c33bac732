//! Options for the forward and inverse converters.

use chrono::{FixedOffset, Offset, Utc};
use imperial_calendar::YearModel;

use crate::check::CheckNumber;
use crate::date::Layout;
use crate::error::ImperialError;
use crate::input::TimestampUnit;

/// Builds a [`FixedOffset`] from seconds east of UTC.
///
/// # Errors
///
/// Returns [`ImperialError::InvalidParameter`] unless the offset lies
/// strictly within one day of UTC.
pub fn utc_offset(seconds: i32) -> Result<FixedOffset, ImperialError> {
    FixedOffset::east_opt(seconds).ok_or(ImperialError::InvalidParameter {
        name: "utc offset",
        value: seconds.to_string(),
    })
}

/// Options for converting a modern date into an imperial date.
///
/// # Example
///
/// ```
/// use imperial_dating::{ForwardOptions, Layout, YearModel};
///
/// let options = ForwardOptions::new()
///     .with_check_number(5)
///     .with_year_model(YearModel::Sidereal)
///     .with_layout(Layout::Compact);
///
/// assert_eq!(options.check_number().get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardOptions {
    check_number: CheckNumber,
    year_model: YearModel,
    layout: Layout,
    timestamp_unit: TimestampUnit,
    utc_offset: FixedOffset,
}

impl ForwardOptions {
    /// Creates options with the defaults: check number 0, simple year,
    /// spaced layout, automatic timestamp unit, UTC.
    pub fn new() -> Self {
        Self {
            check_number: CheckNumber::default(),
            year_model: YearModel::Simple,
            layout: Layout::Spaced,
            timestamp_unit: TimestampUnit::Auto,
            utc_offset: Utc.fix(),
        }
    }

    /// Sets the check number; out-of-range values are clamped.
    pub fn with_check_number(mut self, check_number: impl Into<CheckNumber>) -> Self {
        self.check_number = check_number.into();
        self
    }

    /// Sets the year-length model.
    pub fn with_year_model(mut self, year_model: YearModel) -> Self {
        self.year_model = year_model;
        self
    }

    /// Sets the output layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets how integer timestamps are scaled.
    pub fn with_timestamp_unit(mut self, timestamp_unit: TimestampUnit) -> Self {
        self.timestamp_unit = timestamp_unit;
        self
    }

    /// Sets the reference offset in which calendar years are counted.
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    /// Returns the check number.
    pub fn check_number(&self) -> CheckNumber {
        self.check_number
    }

    /// Returns the year-length model.
    pub fn year_model(&self) -> YearModel {
        self.year_model
    }

    /// Returns the output layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the timestamp unit.
    pub fn timestamp_unit(&self) -> TimestampUnit {
        self.timestamp_unit
    }

    /// Returns the reference offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of the inverse converter's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Milliseconds since the Unix epoch.
    #[default]
    Timestamp,
    /// A `DateTime<Utc>`.
    DateTime,
}

impl OutputKind {
    /// Maps a `return_timestamp` flag onto an output kind.
    pub fn from_return_timestamp(return_timestamp: bool) -> Self {
        if return_timestamp { Self::Timestamp } else { Self::DateTime }
    }
}

/// Options for converting an imperial date back into a modern date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseOptions {
    output: OutputKind,
    source_model: YearModel,
    utc_offset: FixedOffset,
}

impl InverseOptions {
    /// Creates options with the defaults: timestamp output, simple year, UTC.
    pub fn new() -> Self {
        Self {
            output: OutputKind::Timestamp,
            source_model: YearModel::Simple,
            utc_offset: Utc.fix(),
        }
    }

    /// Sets the result shape.
    pub fn with_output(mut self, output: OutputKind) -> Self {
        self.output = output;
        self
    }

    /// Sets the year-length model the imperial date was produced with.
    pub fn with_source_model(mut self, source_model: YearModel) -> Self {
        self.source_model = source_model;
        self
    }

    /// Sets the reference offset in which calendar years are counted.
    pub fn with_utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    /// Returns the result shape.
    pub fn output(&self) -> OutputKind {
        self.output
    }

    /// Returns the source year-length model.
    pub fn source_model(&self) -> YearModel {
        self.source_model
    }

    /// Returns the reference offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_defaults() {
        let options = ForwardOptions::default();
        assert_eq!(options.check_number().get(), 0);
        assert_eq!(options.year_model(), YearModel::Simple);
        assert_eq!(options.layout(), Layout::Spaced);
        assert_eq!(options.timestamp_unit(), TimestampUnit::Auto);
        assert_eq!(options.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn forward_builder_clamps_check_number() {
        assert_eq!(ForwardOptions::new().with_check_number(15).check_number().get(), 9);
        assert_eq!(ForwardOptions::new().with_check_number(-3).check_number().get(), 0);
    }

    #[test]
    fn inverse_defaults() {
        let options = InverseOptions::default();
        assert_eq!(options.output(), OutputKind::Timestamp);
        assert_eq!(options.source_model(), YearModel::Simple);
        assert_eq!(options.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn inverse_builder() {
        let options = InverseOptions::new()
            .with_output(OutputKind::DateTime)
            .with_source_model(YearModel::Sidereal)
            .with_utc_offset(utc_offset(-3600).unwrap());
        assert_eq!(options.output(), OutputKind::DateTime);
        assert_eq!(options.source_model(), YearModel::Sidereal);
        assert_eq!(options.utc_offset().local_minus_utc(), -3600);
    }

    #[test]
    fn output_kind_from_flag() {
        assert_eq!(OutputKind::from_return_timestamp(true), OutputKind::Timestamp);
        assert_eq!(OutputKind::from_return_timestamp(false), OutputKind::DateTime);
    }

    #[test]
    fn offset_bounds() {
        assert!(utc_offset(86_399).is_ok());
        assert!(utc_offset(-86_399).is_ok());
        assert_eq!(
            utc_offset(86_400).unwrap_err(),
            ImperialError::InvalidParameter {
                name: "utc offset",
                value: "86400".to_string(),
            }
        );
    }
}

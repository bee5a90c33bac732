//! Imperial date to modern date.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Utc};
use imperial_calendar::{YearModel, shift_millis, sidereal_drift_millis, year_start};
use tracing::{debug, trace};

use crate::date::ImperialDate;
use crate::error::ImperialError;
use crate::options::{InverseOptions, OutputKind};

/// Result of converting an imperial date back to a modern date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModernValue {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// The instant in UTC.
    DateTime(DateTime<Utc>),
}

impl ModernValue {
    /// Returns the value as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        match self {
            Self::Timestamp(millis) => *millis,
            Self::DateTime(dt) => dt.timestamp_millis(),
        }
    }
}

/// Parses an imperial date and converts it to a modern date.
///
/// Spaces and periods in `imperial` are ignored, so both layouts are
/// accepted. The imperial year fraction names the per-mille slice; the
/// result is the instant that closes that slice (fraction `000` closes the
/// year).
///
/// # Errors
///
/// Returns [`ImperialError`] if the string is malformed or describes a year
/// outside the representable range.
///
/// # Example
///
/// ```
/// use imperial_dating::{InverseOptions, to_modern};
///
/// let spaced = to_modern("5 001 000.M2", &InverseOptions::new()).unwrap();
/// let compact = to_modern("5001000.M2", &InverseOptions::new()).unwrap();
/// assert_eq!(spaced, compact);
/// ```
pub fn to_modern(imperial: &str, options: &InverseOptions) -> Result<ModernValue, ImperialError> {
    let date: ImperialDate = imperial.parse()?;
    date.to_modern(options)
}

impl ImperialDate {
    /// Converts this imperial date to a modern date shaped per `options`.
    ///
    /// # Errors
    ///
    /// See [`to_modern`].
    pub fn to_modern(&self, options: &InverseOptions) -> Result<ModernValue, ImperialError> {
        let utc = self.to_datetime(options.source_model(), options.utc_offset())?;
        Ok(match options.output() {
            OutputKind::Timestamp => ModernValue::Timestamp(utc.timestamp_millis()),
            OutputKind::DateTime => ModernValue::DateTime(utc),
        })
    }

    /// Converts this imperial date to an instant, counting calendar years in
    /// `offset`.
    ///
    /// # Errors
    ///
    /// See [`to_modern`].
    #[tracing::instrument(level = "debug", skip(self, offset), fields(date = %self))]
    pub fn to_datetime(
        &self,
        model: YearModel,
        offset: FixedOffset,
    ) -> Result<DateTime<Utc>, ImperialError> {
        let year = self.year()?;
        let length = model.length_millis(year);
        let elapsed = match self.year_fraction() {
            0 => length,
            fraction => length * i64::from(fraction) / 1000,
        };
        trace!(year, elapsed_ms = elapsed, "recomposed date");

        let mut local = shift_millis(year_start(year)?, elapsed)?;
        if model.is_sidereal() {
            local = revert_sidereal_drift(local, year)?;
        }

        let utc = shift_millis(local, -i64::from(offset.local_minus_utc()) * 1000)?;
        Ok(Utc.from_utc_datetime(&utc))
    }
}

/// Undoes the forward sidereal correction for a date in imperial `year`.
///
/// The forward shift used the drift of the input's own calendar year, which
/// is `year + 1` for early-January inputs. The first source year whose
/// reverted date lands in that same year wins.
fn revert_sidereal_drift(local: NaiveDateTime, year: i32) -> Result<NaiveDateTime, ImperialError> {
    let sources = [year.checked_add(1), Some(year), year.checked_sub(1)];
    for source in sources.into_iter().flatten() {
        let correction = -sidereal_drift_millis(source);
        if let Ok(reverted) = shift_millis(local, correction)
            && reverted.year() == source
        {
            debug!(year, source, correction_ms = correction, "reverted sidereal correction");
            return Ok(reverted);
        }
    }
    let correction = -sidereal_drift_millis(year);
    debug!(year, correction_ms = correction, "no consistent source year, reverting own drift");
    Ok(shift_millis(local, correction)?)
}

//! Modern date to imperial date.

use chrono::Datelike;
use imperial_calendar::{YearModel, elapsed_in_year, shift_millis, sidereal_drift_millis};
use tracing::{debug, trace};

use crate::date::ImperialDate;
use crate::error::ImperialError;
use crate::input::ModernInput;
use crate::options::ForwardOptions;

/// Converts a modern date into a rendered imperial date.
///
/// `input` may be a `DateTime`, a `NaiveDateTime` (wall-clock time in the
/// reference offset), an integer timestamp or text holding one. Layout,
/// check number, year model, timestamp unit and reference offset come from
/// `options`.
///
/// # Errors
///
/// Returns [`ImperialError`] if the input is not a recognizable date, does
/// not map to a representable date, or falls before year 0.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use imperial_dating::{ForwardOptions, Layout, to_imperial};
///
/// let date = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// let options = ForwardOptions::new()
///     .with_check_number(5)
///     .with_layout(Layout::Compact);
///
/// assert_eq!(to_imperial(date, &options).unwrap(), "5001000.M2");
/// ```
pub fn to_imperial(
    input: impl Into<ModernInput>,
    options: &ForwardOptions,
) -> Result<String, ImperialError> {
    let date = ImperialDate::from_modern(input, options)?;
    Ok(date.render(options.layout()))
}

impl ImperialDate {
    /// Converts a modern date into an imperial date.
    ///
    /// The layout in `options` is ignored; see [`to_imperial`] for a
    /// rendered result.
    ///
    /// # Errors
    ///
    /// See [`to_imperial`].
    pub fn from_modern(
        input: impl Into<ModernInput>,
        options: &ForwardOptions,
    ) -> Result<Self, ImperialError> {
        decompose(&input.into(), options)
    }
}

#[tracing::instrument(level = "debug", skip(options), fields(model = %options.year_model()))]
fn decompose(input: &ModernInput, options: &ForwardOptions) -> Result<ImperialDate, ImperialError> {
    let local = input.resolve(options.timestamp_unit(), options.utc_offset())?;

    let working = match options.year_model() {
        YearModel::Simple => local,
        YearModel::Sidereal => {
            let drift = sidereal_drift_millis(local.year());
            debug!(year = local.year(), drift_ms = drift, "applying sidereal correction");
            shift_millis(local, drift)?
        }
    };

    let year = working.year();
    let elapsed = elapsed_in_year(working)?;
    let fraction = year_fraction(elapsed, options.year_model().length_millis(year));
    trace!(year, elapsed_ms = elapsed, fraction, "decomposed date");

    ImperialDate::from_year(options.check_number(), year, fraction)
}

/// Per-mille slice of the year that `elapsed_millis` falls in, 1-based and
/// wrapping to 0 for the last slice.
///
/// A sidereal year is shorter than a leap year, so time past its end stays
/// in the last slice.
pub(crate) fn year_fraction(elapsed_millis: i64, length_millis: i64) -> u16 {
    let slice = (elapsed_millis * 1000).div_euclid(length_millis).min(999);
    (slice + 1).rem_euclid(1000) as u16
}

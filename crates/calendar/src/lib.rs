//! # imperial-calendar
//!
//! Calendar arithmetic shared by the Imperial Dating converters: the
//! Gregorian leap-year rule, the two year-length models, and the drift
//! between the Gregorian and the sidereal year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"is_leap_year()"| B["bool"]
//!     A -->|"YearModel::length_millis()"| C["year length (ms)"]
//!     A -->|"sidereal_drift_millis()"| D["drift over [0, year) (ms)"]
//!     E["NaiveDateTime"] -->|"elapsed_in_year()"| F["ms since Jan 1"]
//!     E -->|"shift_millis()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use imperial_calendar::{YearModel, is_leap_year, sidereal_drift_millis};
//!
//! assert!(is_leap_year(2000));
//! assert_eq!(YearModel::Sidereal.length_millis(2000), 31_558_149_760);
//! assert_eq!(sidereal_drift_millis(2000), -2_395_520_000);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule and year lengths |
//! | `model` | Simple and sidereal year-length models |
//! | `drift` | Gregorian-vs-sidereal drift accumulation |
//! | `date` | Year start, elapsed time and shifting on `NaiveDateTime` |
//! | `error` | Error types |

mod date;
mod drift;
mod error;
mod leap;
mod model;

pub use date::{elapsed_in_year, shift_millis, year_start};
pub use drift::{sidereal_drift_hours, sidereal_drift_millis};
pub use error::CalendarError;
pub use leap::{
    MILLIS_PER_DAY, days_in_year, gregorian_year_millis, is_leap_year, leap_years_before,
};
pub use model::{SIDEREAL_YEAR_HOURS, SIDEREAL_YEAR_MILLIS, YearModel};

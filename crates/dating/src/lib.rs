//! # imperial-dating
//!
//! Conversion between calendar timestamps and Imperial Dating strings of the
//! form `C YYY MMM.Mn`:
//!
//! - `C`: check number, a caller-supplied digit
//! - `YYY`: per-mille of the year elapsed, 001 at the first instant of the
//!   year and 000 in its last slice
//! - `MMM`: year within the millennium (000 for multiples of 1000)
//! - `n`: millennium, `ceil(year / 1000)`
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ModernInput"] -->|"to_imperial()"| B["String"]
//!     A -->|"ImperialDate::from_modern()"| C["ImperialDate"]
//!     B -->|"parse()"| C
//!     C -->|"render(Layout)"| B
//!     B -->|"to_modern()"| D["ModernValue"]
//!     C -->|"ImperialDate::to_modern()"| D
//!     E["Clock"] -->|"imperial_now()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use imperial_dating::{ForwardOptions, InverseOptions, Layout, to_imperial, to_modern};
//!
//! let date = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
//! let options = ForwardOptions::new().with_check_number(5).with_layout(Layout::Compact);
//! let imperial = to_imperial(date, &options).unwrap();
//! assert_eq!(imperial, "5001000.M2");
//!
//! // The result closes the per-mille slice the date fell in.
//! let back = to_modern(&imperial, &InverseOptions::new()).unwrap();
//! assert!(back.timestamp_millis() >= date.timestamp_millis());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `ImperialDate` value, parsing and layouts |
//! | `check` | Check number newtype |
//! | `input` | Modern inputs and timestamp units |
//! | `forward` | Modern to imperial conversion |
//! | `inverse` | Imperial to modern conversion |
//! | `options` | Converter options |
//! | `config` | TOML configuration |
//! | `clock` | Current-time providers |
//! | `error` | Error types |

mod check;
mod clock;
mod config;
mod date;
mod error;
mod forward;
mod input;
mod inverse;
mod options;

pub use check::CheckNumber;
pub use clock::{Clock, FixedClock, SystemClock, imperial_now};
pub use config::{DatingConfig, ForwardToml, InverseToml};
pub use date::{ImperialDate, Layout};
pub use error::{ErrorKind, ImperialError};
pub use forward::to_imperial;
pub use input::{ModernInput, TimestampUnit};
pub use inverse::{ModernValue, to_modern};
pub use options::{ForwardOptions, InverseOptions, OutputKind, utc_offset};

pub use imperial_calendar::{YearModel, is_leap_year};

//! Caller-supplied "current time".

use chrono::{DateTime, Utc};

use crate::error::ImperialError;
use crate::forward::to_imperial;
use crate::options::ForwardOptions;

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Renders the current instant of `clock` as an imperial date.
///
/// # Errors
///
/// See [`to_imperial`].
pub fn imperial_now<C: Clock + ?Sized>(
    clock: &C,
    options: &ForwardOptions,
) -> Result<String, ImperialError> {
    to_imperial(clock.now(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let options = ForwardOptions::new().with_check_number(5);
        assert_eq!(imperial_now(&FixedClock(instant), &options).unwrap(), "5 001 000.M2");
    }

    #[test]
    fn closure_clock() {
        let clock = || Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(imperial_now(&clock, &ForwardOptions::new()).unwrap(), "0 001 001.M3");
    }

    #[test]
    fn dyn_clock() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock(instant));
        assert_eq!(
            imperial_now(clock.as_ref(), &ForwardOptions::new()).unwrap(),
            "0 000 023.M3"
        );
    }

    #[test]
    fn system_clock_is_current_millennium() {
        let rendered = imperial_now(&SystemClock, &ForwardOptions::new()).unwrap();
        assert!(rendered.ends_with(".M3"), "{rendered}");
    }
}

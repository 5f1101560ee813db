//! Source of "today" for financial-year decisions.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use super::error::FiscalError;

/// Supplies the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock evaluated in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock for the given timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Creates a clock from an IANA name such as `Asia/Kolkata`.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::UnknownTimezone` if the name is not in the tz
    /// database.
    pub fn from_name(name: &str) -> Result<Self, FiscalError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| FiscalError::UnknownTimezone(name.to_string()))
    }

    /// The timezone this clock reads dates in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clock_is_india() {
        assert_eq!(SystemClock::default().timezone(), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_from_name() {
        let clock = SystemClock::from_name("Europe/London").unwrap();
        assert_eq!(clock.timezone(), chrono_tz::Europe::London);
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(
            SystemClock::from_name("Mars/Olympus").unwrap_err(),
            FiscalError::UnknownTimezone("Mars/Olympus".into())
        );
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}

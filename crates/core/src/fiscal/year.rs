//! Financial year calculator.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::error::FiscalError;

/// Calendar month (1-based) on which a financial year begins.
pub const FINANCIAL_YEAR_START_MONTH: u32 = 4;

/// Latest representable start year; its end year is `i32::MAX`.
pub const MAX_START_YEAR: i32 = i32::MAX - 1;

/// An April–March financial year.
///
/// `end_year` is always `start_year + 1`. Values are only built through the
/// constructors below, and deserialisation rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFinancialYear")]
pub struct FinancialYear {
    start_year: i32,
    end_year: i32,
}

#[derive(Deserialize)]
struct RawFinancialYear {
    start_year: i32,
    end_year: i32,
}

impl TryFrom<RawFinancialYear> for FinancialYear {
    type Error = FiscalError;

    fn try_from(raw: RawFinancialYear) -> Result<Self, Self::Error> {
        if raw.start_year.checked_add(1) == Some(raw.end_year) {
            Ok(Self {
                start_year: raw.start_year,
                end_year: raw.end_year,
            })
        } else {
            Err(FiscalError::NonConsecutiveYears {
                start_year: raw.start_year,
                end_year: raw.end_year,
            })
        }
    }
}

/// First and last day of a financial year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYearBounds {
    /// April 1 of the start year.
    pub start_date: NaiveDate,
    /// March 31 of the end year.
    pub end_date: NaiveDate,
}

/// Returns the financial year containing today, per `clock`.
#[must_use]
pub fn current_financial_year(clock: &impl Clock) -> FinancialYear {
    FinancialYear::for_date(clock.today())
}

impl FinancialYear {
    /// The financial year beginning in April of `start_year`.
    ///
    /// Start years above [`MAX_START_YEAR`] are clamped to it. Use
    /// [`FinancialYear::try_starting`] to reject them instead.
    #[must_use]
    pub const fn starting(start_year: i32) -> Self {
        let start_year = if start_year > MAX_START_YEAR {
            MAX_START_YEAR
        } else {
            start_year
        };
        Self {
            start_year,
            end_year: start_year + 1,
        }
    }

    /// The financial year beginning in April of `start_year`, or `None` if its
    /// end year does not fit in an `i32`.
    #[must_use]
    pub const fn try_starting(start_year: i32) -> Option<Self> {
        if start_year > MAX_START_YEAR {
            None
        } else {
            Some(Self::starting(start_year))
        }
    }

    /// The financial year containing `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= FINANCIAL_YEAR_START_MONTH {
            Self::starting(date.year())
        } else {
            Self::starting(date.year() - 1)
        }
    }

    /// The financial year containing today.
    #[must_use]
    pub fn current(clock: &impl Clock) -> Self {
        current_financial_year(clock)
    }

    /// The current financial year followed by `count - 1` earlier ones.
    #[must_use]
    pub fn recent(clock: &impl Clock, count: usize) -> Vec<Self> {
        std::iter::successors(Some(Self::current(clock)), Self::previous)
            .take(count)
            .collect()
    }

    /// Calendar year in which the financial year starts.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Calendar year in which the financial year ends.
    #[must_use]
    pub const fn end_year(&self) -> i32 {
        self.end_year
    }

    /// April 1 through March 31.
    ///
    /// `None` only for years outside the range `chrono` can represent.
    #[must_use]
    pub fn bounds(&self) -> Option<FinancialYearBounds> {
        Some(FinancialYearBounds {
            start_date: NaiveDate::from_ymd_opt(self.start_year, FINANCIAL_YEAR_START_MONTH, 1)?,
            end_date: NaiveDate::from_ymd_opt(self.end_year, FINANCIAL_YEAR_START_MONTH - 1, 31)?,
        })
    }

    /// Returns true if `date` falls in this financial year.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::for_date(date) == *self
    }

    /// The financial year before this one, or `None` below `i32::MIN`.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self.start_year.checked_sub(1) {
            Some(start_year) => Some(Self::starting(start_year)),
            None => None,
        }
    }

    /// The financial year after this one, or `None` past [`MAX_START_YEAR`].
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self.start_year.checked_add(1) {
            Some(start_year) => Self::try_starting(start_year),
            None => None,
        }
    }

    /// Returns true if this is the financial year containing today.
    #[must_use]
    pub fn is_current(&self, clock: &impl Clock) -> bool {
        *self == Self::current(clock)
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.start_year, self.end_year.rem_euclid(100))
    }
}

impl FromStr for FinancialYear {
    type Err = FiscalError;

    /// Accepts `2023-24`, `2023-2024` or a bare start year `2023`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let invalid = || FiscalError::InvalidLabel(s.to_string());

        if let Ok(start_year) = label.parse::<i32>() {
            return Self::try_starting(start_year).ok_or_else(invalid);
        }

        let (start, end) = label.rsplit_once('-').ok_or_else(invalid)?;
        let start_year = start.parse().map_err(|_| invalid())?;
        let fy = Self::try_starting(start_year).ok_or_else(invalid)?;

        let matches = match end.len() {
            2 => end.parse::<i32>().ok() == Some(fy.end_year.rem_euclid(100)),
            _ => end.parse::<i32>().ok() == Some(fy.end_year),
        };
        if matches { Ok(fy) } else { Err(invalid()) }
    }
}

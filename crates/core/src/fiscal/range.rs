//! Inclusive date-range predicate and item date parsing.
//!
//! Dates are calendar dates (`NaiveDate`). Timestamps are reduced to the
//! calendar date in their own UTC offset, never in the host timezone.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::FiscalError;

/// Optional inclusive `[start, end]` window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date included, if bounded.
    pub start: Option<NaiveDate>,
    /// Latest date included, if bounded.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true if `date` lies within the present bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        is_in_range(date, self.start, self.end)
    }
}

/// Inclusive range test. Missing bounds never exclude.
#[must_use]
pub fn is_in_range(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start.is_some_and(|start| date < start) {
        return false;
    }
    if end.is_some_and(|end| date > end) {
        return false;
    }
    true
}

/// Parses an item date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// A timestamp keeps the calendar date of its own offset.
///
/// # Errors
///
/// Returns `FiscalError::InvalidDate` if neither form matches.
pub fn parse_item_date(raw: &str) -> Result<NaiveDate, FiscalError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .map_err(|_| FiscalError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_unbounded_includes_everything() {
        assert!(is_in_range(d(1900, 1, 1), None, None));
        assert!(DateRange::unbounded().contains(d(2999, 12, 31)));
        assert!(DateRange::unbounded().is_unbounded());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(d(2024, 1, 1)), Some(d(2024, 1, 31)));
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 1, 31)));
        assert!(!range.contains(d(2023, 12, 31)));
        assert!(!range.contains(d(2024, 2, 1)));
    }

    #[test]
    fn test_single_bound() {
        assert!(is_in_range(d(2030, 1, 1), Some(d(2024, 1, 1)), None));
        assert!(!is_in_range(d(2020, 1, 1), Some(d(2024, 1, 1)), None));
        assert!(is_in_range(d(2020, 1, 1), None, Some(d(2024, 1, 1))));
        assert!(!is_in_range(d(2030, 1, 1), None, Some(d(2024, 1, 1))));
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_item_date("2024-04-01").unwrap(), d(2024, 4, 1));
        assert_eq!(parse_item_date(" 2024-04-01 ").unwrap(), d(2024, 4, 1));
    }

    #[test]
    fn test_parse_timestamp_keeps_its_own_offset() {
        // Midnight in India is still the previous day in UTC.
        assert_eq!(
            parse_item_date("2024-04-01T00:30:00+05:30").unwrap(),
            d(2024, 4, 1)
        );
        assert_eq!(
            parse_item_date("2024-03-31T20:00:00Z").unwrap(),
            d(2024, 3, 31)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_item_date("01/04/2024").unwrap_err(),
            FiscalError::InvalidDate("01/04/2024".into())
        );
    }
}

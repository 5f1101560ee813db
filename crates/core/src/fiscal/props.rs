//! Property-based tests for financial years and date ranges.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::range::is_in_range;
use super::year::{FINANCIAL_YEAR_START_MONTH, FinancialYear};

/// Strategy to generate calendar dates between years 1 and 9999.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..10_000, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal 1..=365 exists in every year")
    })
}

/// Strategy to generate financial years, including negative start years.
fn any_financial_year() -> impl Strategy<Value = FinancialYear> {
    (-100_000i32..100_000).prop_map(FinancialYear::starting)
}

/// Strategy to generate any start year an `i32` can hold.
fn any_start_year() -> impl Strategy<Value = i32> {
    any::<i32>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// April onwards belongs to the FY starting that year; earlier months to the
    /// FY ending that year.
    #[test]
    fn prop_for_date_cutover(date in any_date()) {
        let fy = FinancialYear::for_date(date);
        if date.month() >= FINANCIAL_YEAR_START_MONTH {
            prop_assert_eq!(fy.start_year(), date.year());
        } else {
            prop_assert_eq!(fy.end_year(), date.year());
        }
        prop_assert_eq!(fy.end_year(), fy.start_year() + 1);
    }

    /// Stepping forward then back returns the same year.
    #[test]
    fn prop_next_previous_round_trip(fy in any_financial_year()) {
        prop_assert_eq!(fy.next().and_then(|n| n.previous()), Some(fy));
        prop_assert_eq!(fy.previous().and_then(|p| p.next()), Some(fy));
    }

    /// `contains` agrees with the bounds of the year.
    #[test]
    fn prop_contains_matches_bounds(date in any_date()) {
        let fy = FinancialYear::for_date(date);
        let bounds = fy.bounds().expect("years 1..10000 are representable");
        prop_assert!(fy.contains(date));
        prop_assert!(bounds.start_date <= date && date <= bounds.end_date);
        prop_assert!(fy.next().is_some_and(|n| !n.contains(date)));
        prop_assert!(fy.previous().is_some_and(|p| !p.contains(date)));
    }

    /// Construction never breaks the consecutive-years invariant, and
    /// navigation either stays consecutive or reports the end of the range.
    #[test]
    fn prop_extreme_years_stay_consecutive(start_year in any_start_year()) {
        let fy = FinancialYear::starting(start_year);
        prop_assert_eq!(i64::from(fy.end_year()), i64::from(fy.start_year()) + 1);
        for neighbour in [fy.next(), fy.previous()].into_iter().flatten() {
            prop_assert_eq!(
                i64::from(neighbour.end_year()),
                i64::from(neighbour.start_year()) + 1
            );
        }
        prop_assert_eq!(
            FinancialYear::try_starting(start_year).is_some(),
            start_year < i32::MAX
        );
    }

    /// Labels parse back to the year that produced them.
    #[test]
    fn prop_label_round_trip(fy in any_financial_year()) {
        let label = fy.to_string();
        prop_assert_eq!(label.parse::<FinancialYear>().unwrap(), fy);
    }

    /// An unbounded range includes every date.
    #[test]
    fn prop_unbounded_range_includes_all(date in any_date()) {
        prop_assert!(is_in_range(date, None, None));
    }

    /// Dates strictly outside a bound are excluded, and bounds themselves are
    /// included.
    #[test]
    fn prop_range_bounds(a in any_date(), b in any_date(), date in any_date()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let inside = is_in_range(date, Some(start), Some(end));
        prop_assert_eq!(inside, start <= date && date <= end);
        prop_assert!(is_in_range(start, Some(start), Some(end)));
        prop_assert!(is_in_range(end, Some(start), Some(end)));
    }
}

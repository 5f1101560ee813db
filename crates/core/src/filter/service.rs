//! Filter evaluation and mutation.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::types::{DateScope, FilterState, FilterUpdate, Filterable, PaymentStatus};
use crate::fiscal::{Clock, DateRange, FinancialYear};

impl FilterState {
    /// Creates a state with every dimension inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field.
    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Category(value) => self.category = value,
            FilterUpdate::Vendor(value) => self.vendor = value,
            FilterUpdate::PaymentStatus(value) => self.payment_status = value,
            FilterUpdate::StartDate(date) => self.start_date = date,
            FilterUpdate::EndDate(date) => self.end_date = date,
        }
    }

    /// Restores every dimension to inactive and clears both date bounds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if any dimension differs from its default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all()
            || !self.vendor.is_all()
            || !self.payment_status.is_all()
            || self.start_date.is_some()
            || self.end_date.is_some()
    }

    /// Explicit bounds win; without any, the financial year containing
    /// `today` applies.
    #[must_use]
    pub fn date_scope(&self, today: NaiveDate) -> DateScope {
        let range = DateRange::new(self.start_date, self.end_date);
        if range.is_unbounded() {
            DateScope::FinancialYear(FinancialYear::for_date(today))
        } else {
            DateScope::Range(range)
        }
    }

    /// Returns true if `item` passes the non-date dimensions.
    #[must_use]
    pub fn matches_attributes<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.category.matches(item.category())
            && self.vendor.matches(item.vendor_name())
            && self
                .payment_status
                .matches(&PaymentStatus::from_paid(item.is_paid()))
    }

    /// Filters `items` as of `today`, most recent first.
    ///
    /// Items with equal dates have no guaranteed relative order.
    #[must_use]
    pub fn apply_on<'a, T: Filterable>(&self, items: &'a [T], today: NaiveDate) -> Vec<&'a T> {
        let scope = self.date_scope(today);
        let mut result: Vec<&T> = items
            .iter()
            .filter(|item| scope.contains(item.date()) && self.matches_attributes(*item))
            .collect();
        result.sort_unstable_by(|a, b| b.date().cmp(&a.date()));
        result
    }

    /// Filters `items` using the clock's date for the financial-year fallback.
    #[must_use]
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T], clock: &impl Clock) -> Vec<&'a T> {
        self.apply_on(items, clock.today())
    }
}

/// Sorted, de-duplicated category names, for pickers.
#[must_use]
pub fn distinct_categories<T: Filterable>(items: &[T]) -> Vec<String> {
    distinct(items.iter().map(|item| item.category()))
}

/// Sorted, de-duplicated vendor names, for pickers.
#[must_use]
pub fn distinct_vendors<T: Filterable>(items: &[T]) -> Vec<String> {
    distinct(items.iter().map(|item| item.vendor_name()))
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

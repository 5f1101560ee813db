//! Filter data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fiscal::{DateRange, FinancialYear};

/// Capability needed for a record to be filtered.
pub trait Filterable {
    /// Date the record belongs to.
    fn date(&self) -> NaiveDate;
    /// Category name.
    fn category(&self) -> &str;
    /// Vendor name.
    fn vendor_name(&self) -> &str;
    /// Whether the record has been paid.
    fn is_paid(&self) -> bool;
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn vendor_name(&self) -> &str {
        (**self).vendor_name()
    }

    fn is_paid(&self) -> bool {
        (**self).is_paid()
    }
}

/// One filter dimension: either inactive or an equality match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FilterValue<T> {
    /// No filter on this dimension.
    #[default]
    All,
    /// Keep only records equal to the value.
    Equals(T),
}

impl<T> FilterValue<T> {
    /// Returns true if this dimension filters nothing.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true if `value` passes this dimension.
    #[must_use]
    pub fn matches<U>(&self, value: &U) -> bool
    where
        U: ?Sized,
        T: PartialEq<U>,
    {
        match self {
            Self::All => true,
            Self::Equals(expected) => expected == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for FilterValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Equals(value) => write!(f, "{value}"),
        }
    }
}

impl<T: FromStr> FromStr for FilterValue<T> {
    type Err = T::Err;

    /// `all` (any case) clears the dimension.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.trim().parse().map(Self::Equals)
        }
    }
}

/// Payment status dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Fully paid.
    Paid,
    /// Not yet paid.
    Unpaid,
}

impl PaymentStatus {
    /// Status for a record's `is_paid` flag.
    #[must_use]
    pub const fn from_paid(is_paid: bool) -> Self {
        if is_paid { Self::Paid } else { Self::Unpaid }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Unpaid => write!(f, "unpaid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "unpaid" | "pending" => Ok(Self::Unpaid),
            _ => Err(format!("Unknown payment status: {s}")),
        }
    }
}

/// Filter selections for one list view. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Category dimension.
    pub category: FilterValue<String>,
    /// Vendor dimension.
    pub vendor: FilterValue<String>,
    /// Paid/unpaid dimension.
    pub payment_status: FilterValue<PaymentStatus>,
    /// Explicit lower date bound.
    pub start_date: Option<NaiveDate>,
    /// Explicit upper date bound.
    pub end_date: Option<NaiveDate>,
}

/// Replacement of a single `FilterState` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Set the category dimension.
    Category(FilterValue<String>),
    /// Set the vendor dimension.
    Vendor(FilterValue<String>),
    /// Set the payment status dimension.
    PaymentStatus(FilterValue<PaymentStatus>),
    /// Set or clear the lower date bound.
    StartDate(Option<NaiveDate>),
    /// Set or clear the upper date bound.
    EndDate(Option<NaiveDate>),
}

/// Which date restriction a `FilterState` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateScope {
    /// No explicit bounds: only the given financial year.
    FinancialYear(FinancialYear),
    /// At least one explicit bound: only the range.
    Range(DateRange),
}

impl DateScope {
    /// Returns true if `date` passes this scope.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::FinancialYear(fy) => fy.contains(date),
            Self::Range(range) => range.contains(date),
        }
    }
}

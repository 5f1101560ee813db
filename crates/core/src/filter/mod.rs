//! Filtering of dated, categorised records.
//!
//! When no explicit date bound is set, items are restricted to the current
//! financial year. Setting either bound switches to range mode and the
//! financial-year restriction no longer applies.

pub mod service;
pub mod types;


pub use service::{distinct_categories, distinct_vendors};
pub use types::{DateScope, FilterState, FilterUpdate, FilterValue, Filterable, PaymentStatus};

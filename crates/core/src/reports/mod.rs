//! Financial-year report generation.
//!
//! Pure aggregation over already-loaded records:
//! - Income (payments net of refunds, additional income)
//! - Expenses (paid and outstanding, tax-inclusive)
//! - GST split on paid expenses
//! - Expenses per category

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;

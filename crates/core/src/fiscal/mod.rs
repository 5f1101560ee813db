//! Financial year management.
//!
//! Indian financial years run from April 1 to March 31 and are named by the
//! two calendar years they straddle (FY 2023-24).

pub mod clock;
pub mod error;
pub mod range;
pub mod year;

#[cfg(test)]
mod props;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::FiscalError;
pub use range::{DateRange, is_in_range, parse_item_date};
pub use year::{
    FINANCIAL_YEAR_START_MONTH, FinancialYear, FinancialYearBounds, MAX_START_YEAR,
    current_financial_year,
};

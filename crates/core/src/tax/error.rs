//! Tax error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Tax-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// Base amount cannot be negative.
    #[error("Base amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Tax percentage cannot be negative.
    #[error("Tax percentage cannot be negative: {0}")]
    NegativePercentage(Decimal),

    /// Tax rate name is empty.
    #[error("Tax rate name cannot be empty")]
    EmptyName,
}

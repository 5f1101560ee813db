//! Tax calculation service.

use rust_decimal::Decimal;

use super::book::TaxRateBook;
use super::error::TaxError;
use super::types::{TaxCalculation, TaxSelection};

/// Tax calculation for business logic.
pub struct TaxCalculator;

impl TaxCalculator {
    /// Applies `tax_percentage` (whole percent) to `base_amount`.
    ///
    /// tax = base * pct / 100, split evenly into CGST and SGST.
    /// No rounding is applied; `Decimal` keeps the exact result.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::NegativeAmount` or `TaxError::NegativePercentage`
    /// for negative inputs.
    pub fn calculate(
        base_amount: Decimal,
        tax_percentage: Decimal,
    ) -> Result<TaxCalculation, TaxError> {
        if base_amount.is_sign_negative() && !base_amount.is_zero() {
            return Err(TaxError::NegativeAmount(base_amount));
        }
        if tax_percentage.is_sign_negative() && !tax_percentage.is_zero() {
            return Err(TaxError::NegativePercentage(tax_percentage));
        }

        let tax_amount = base_amount * tax_percentage / Decimal::ONE_HUNDRED;
        let half = tax_amount / Decimal::TWO;

        Ok(TaxCalculation {
            base_amount,
            tax_percentage,
            tax_amount,
            cgst_amount: half,
            sgst_amount: half,
            total_amount: base_amount + tax_amount,
        })
    }

    /// Applies the rate picked by `selection`, looked up in `book`.
    ///
    /// `TaxSelection::None` and ids missing from the book both mean no tax.
    ///
    /// # Errors
    ///
    /// Same as [`TaxCalculator::calculate`].
    pub fn calculate_for(
        base_amount: Decimal,
        selection: TaxSelection,
        book: &TaxRateBook,
    ) -> Result<TaxCalculation, TaxError> {
        match book.percentage_for(selection) {
            Some(pct) => Self::calculate(base_amount, pct),
            None if base_amount.is_sign_negative() && !base_amount.is_zero() => {
                Err(TaxError::NegativeAmount(base_amount))
            }
            None => Ok(TaxCalculation::untaxed(base_amount)),
        }
    }
}

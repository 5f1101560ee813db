//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::FinancialYear;

/// Tax-inclusive expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Expense category.
    pub category: String,
    /// Sum of tax-inclusive totals.
    pub total: Decimal,
    /// Number of expenses.
    pub count: usize,
}

/// Summary of one financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYearReport {
    /// Year covered.
    pub financial_year: FinancialYear,
    /// Bookings whose event falls in the year.
    pub bookings: usize,
    /// Hall rent of those bookings.
    pub rent_billed: Decimal,
    /// Payments received, refunds subtracted.
    pub payments_received: Decimal,
    /// Additional income charged.
    pub additional_income: Decimal,
    /// Payments plus additional income.
    pub total_income: Decimal,
    /// Paid expenses, tax included.
    pub expenses_paid: Decimal,
    /// Unpaid expenses, tax included.
    pub expenses_outstanding: Decimal,
    /// Paid plus outstanding.
    pub total_expenses: Decimal,
    /// Central GST on paid expenses.
    pub cgst_paid: Decimal,
    /// State GST on paid expenses.
    pub sgst_paid: Decimal,
    /// Total income minus paid expenses.
    pub net: Decimal,
    /// Expenses per category, ordered by name.
    pub expenses_by_category: Vec<CategoryTotal>,
}

impl FinancialYearReport {
    /// Empty report for `financial_year`.
    #[must_use]
    pub fn empty(financial_year: FinancialYear) -> Self {
        Self {
            financial_year,
            bookings: 0,
            rent_billed: Decimal::ZERO,
            payments_received: Decimal::ZERO,
            additional_income: Decimal::ZERO,
            total_income: Decimal::ZERO,
            expenses_paid: Decimal::ZERO,
            expenses_outstanding: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            cgst_paid: Decimal::ZERO,
            sgst_paid: Decimal::ZERO,
            net: Decimal::ZERO,
            expenses_by_category: Vec::new(),
        }
    }

    /// Returns true if rent billed exceeds what was received.
    #[must_use]
    pub fn has_dues(&self) -> bool {
        self.rent_billed > self.payments_received
    }
}

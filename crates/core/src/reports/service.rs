//! Report generation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{CategoryTotal, FinancialYearReport};
use crate::entities::{AdditionalIncome, Booking, Expense, Payment};
use crate::fiscal::FinancialYear;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Summarises one financial year.
    ///
    /// Bookings count by event date; every other record by its own date.
    /// Records outside the year are ignored.
    #[must_use]
    pub fn financial_year_report(
        financial_year: FinancialYear,
        bookings: &[Booking],
        payments: &[Payment],
        additional_income: &[AdditionalIncome],
        expenses: &[Expense],
    ) -> FinancialYearReport {
        let mut report = FinancialYearReport::empty(financial_year);

        for booking in bookings
            .iter()
            .filter(|b| financial_year.contains(b.event_date))
        {
            report.bookings += 1;
            report.rent_billed += booking.rent;
        }

        report.payments_received = payments
            .iter()
            .filter(|p| financial_year.contains(p.date))
            .map(Payment::signed_amount)
            .sum();

        report.additional_income = additional_income
            .iter()
            .filter(|a| financial_year.contains(a.date))
            .map(|a| a.amount)
            .sum();

        let mut by_category: BTreeMap<&str, CategoryTotal> = BTreeMap::new();
        for expense in expenses
            .iter()
            .filter(|e| financial_year.contains(e.date))
        {
            let total = expense.tax.total_amount;
            if expense.is_paid {
                report.expenses_paid += total;
                report.cgst_paid += expense.tax.cgst_amount;
                report.sgst_paid += expense.tax.sgst_amount;
            } else {
                report.expenses_outstanding += total;
            }

            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert_with(|| CategoryTotal {
                    category: expense.category.clone(),
                    total: Decimal::ZERO,
                    count: 0,
                });
            entry.total += total;
            entry.count += 1;
        }

        report.total_income = report.payments_received + report.additional_income;
        report.total_expenses = report.expenses_paid + report.expenses_outstanding;
        report.net = report.total_income - report.expenses_paid;
        report.expenses_by_category = by_category.into_values().collect();

        tracing::debug!(
            financial_year = %financial_year,
            bookings = report.bookings,
            net = %report.net,
            "Built financial year report"
        );

        report
    }
}

//! Domain records mirrored from the remote store.

use chrono::{DateTime, NaiveDate, Utc};
use mandap_shared::types::{
    AdditionalIncomeId, BookingId, ExpenseId, IncomeCategoryId, PaymentId, VendorId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::Filterable;
use crate::store::Entity;
use crate::tax::TaxCalculation;

/// A venue booking for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier.
    pub id: BookingId,
    /// Customer who booked the venue.
    pub customer_name: String,
    /// Event name (e.g., "Priya weds Arjun").
    pub event_name: String,
    /// Day of the event.
    pub event_date: NaiveDate,
    /// Agreed hall rent.
    pub rent: Decimal,
    /// When the booking was recorded.
    pub created_at: DateTime<Utc>,
}

impl Entity for Booking {
    type Id = BookingId;
    const NAME: &'static str = "booking";

    fn id(&self) -> BookingId {
        self.id
    }

    fn booking_id(&self) -> Option<BookingId> {
        Some(self.id)
    }
}

/// A supplier the venue pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier.
    pub id: VendorId,
    /// Vendor name.
    pub name: String,
    /// Service provided (e.g., "Catering").
    pub service: String,
    /// Contact number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl Entity for Vendor {
    type Id = VendorId;
    const NAME: &'static str = "vendor";

    fn id(&self) -> VendorId {
        self.id
    }
}

/// Money paid out, optionally against a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Booking the expense was incurred for.
    #[serde(default)]
    pub booking_id: Option<BookingId>,
    /// Expense category.
    pub category: String,
    /// Vendor paid.
    pub vendor_name: String,
    /// Free-text note.
    #[serde(default)]
    pub description: String,
    /// Expense date.
    pub date: NaiveDate,
    /// Whether the vendor has been paid.
    pub is_paid: bool,
    /// Base amount with GST breakdown.
    #[serde(flatten)]
    pub tax: TaxCalculation,
}

impl Entity for Expense {
    type Id = ExpenseId;
    const NAME: &'static str = "expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn booking_id(&self) -> Option<BookingId> {
        self.booking_id
    }
}

impl Filterable for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    fn is_paid(&self) -> bool {
        self.is_paid
    }
}

/// Kind of booking payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Advance collected at booking time.
    Advance,
    /// Balance collected before or after the event.
    Balance,
    /// Money returned to the customer.
    Refund,
}

impl PaymentKind {
    /// Label used as the payment's category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Advance => "Advance",
            Self::Balance => "Balance",
            Self::Refund => "Refund",
        }
    }
}

/// Money received from (or refunded to) a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier.
    pub id: PaymentId,
    /// Booking paid for.
    pub booking_id: BookingId,
    /// Payer.
    pub payer_name: String,
    /// Payment kind.
    pub kind: PaymentKind,
    /// Amount, always positive; refunds are subtracted by reports.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
}

impl Payment {
    /// Amount with refunds negated.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            PaymentKind::Refund => -self.amount,
            PaymentKind::Advance | PaymentKind::Balance => self.amount,
        }
    }
}

impl Entity for Payment {
    type Id = PaymentId;
    const NAME: &'static str = "payment";

    fn id(&self) -> PaymentId {
        self.id
    }

    fn booking_id(&self) -> Option<BookingId> {
        Some(self.booking_id)
    }
}

impl Filterable for Payment {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        self.kind.label()
    }

    fn vendor_name(&self) -> &str {
        &self.payer_name
    }

    fn is_paid(&self) -> bool {
        true
    }
}

/// A kind of income beyond hall rent (e.g., "Generator", "Cleaning").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeCategory {
    /// Unique identifier.
    pub id: IncomeCategoryId,
    /// Category name.
    pub name: String,
}

impl Entity for IncomeCategory {
    type Id = IncomeCategoryId;
    const NAME: &'static str = "income category";

    fn id(&self) -> IncomeCategoryId {
        self.id
    }
}

/// Extra income charged on a booking. One line per category per booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalIncome {
    /// Unique identifier.
    pub id: AdditionalIncomeId,
    /// Booking charged.
    pub booking_id: BookingId,
    /// Income category.
    pub category_id: IncomeCategoryId,
    /// Category name at the time of charging.
    pub category_name: String,
    /// Amount charged.
    pub amount: Decimal,
    /// Date charged.
    pub date: NaiveDate,
}

impl AdditionalIncome {
    /// Key enforcing one line per category per booking.
    #[must_use]
    pub fn booking_category_key(&self) -> String {
        format!("{}:{}", self.booking_id, self.category_id)
    }
}

impl Entity for AdditionalIncome {
    type Id = AdditionalIncomeId;
    const NAME: &'static str = "additional income";

    fn id(&self) -> AdditionalIncomeId {
        self.id
    }

    fn booking_id(&self) -> Option<BookingId> {
        Some(self.booking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxCalculator;
    use rust_decimal_macros::dec;

    #[test]
    fn test_expense_json_flattens_tax() {
        let expense = Expense {
            id: ExpenseId::new(),
            booking_id: None,
            category: "Catering".into(),
            vendor_name: "Annapurna".into(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            is_paid: true,
            tax: TaxCalculator::calculate(dec!(1000), dec!(18)).unwrap(),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("total_amount").is_some());
        assert!(json.get("tax").is_none());
        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_refund_is_negative() {
        let payment = Payment {
            id: PaymentId::new(),
            booking_id: BookingId::new(),
            payer_name: "Ravi".into(),
            kind: PaymentKind::Refund,
            amount: dec!(5000),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(payment.signed_amount(), dec!(-5000));
        assert_eq!(payment.category(), "Refund");
        assert!(payment.is_paid());
    }
}

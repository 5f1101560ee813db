//! Additional income charged on a booking.

use std::sync::Arc;

use chrono::NaiveDate;
use mandap_shared::types::{AdditionalIncomeId, BookingId};
use rust_decimal::Decimal;
use tracing::info;

use super::collection::EntityCollection;
use super::repository::EntityStore;
use crate::entities::{AdditionalIncome, IncomeCategory};
use crate::notify::{Notification, Notifier};

/// Message shown when a category is charged twice on one booking.
pub const DUPLICATE_CATEGORY_MESSAGE: &str =
    "This income category has already been added to the booking.";

/// Additional income lines of one booking.
///
/// The store enforces one line per category per booking and reports a
/// second one as a conflict.
pub struct AdditionalIncomeService<S: EntityStore<AdditionalIncome>, N: Notifier> {
    booking: BookingId,
    notifier: Arc<N>,
    lines: EntityCollection<AdditionalIncome, S, N>,
}

impl<S: EntityStore<AdditionalIncome>, N: Notifier> AdditionalIncomeService<S, N> {
    /// Creates the service for `booking`. Call `refresh` to load lines.
    #[must_use]
    pub fn new(booking: BookingId, store: Arc<S>, notifier: Arc<N>) -> Self {
        let lines = EntityCollection::new(store, Arc::clone(&notifier))
            .for_booking(booking)
            .with_conflict_message(DUPLICATE_CATEGORY_MESSAGE);
        Self {
            booking,
            notifier,
            lines,
        }
    }

    /// Booking served.
    #[must_use]
    pub const fn booking(&self) -> BookingId {
        self.booking
    }

    /// Loaded lines.
    #[must_use]
    pub fn lines(&self) -> &[AdditionalIncome] {
        self.lines.items()
    }

    /// Reloads lines from the store.
    pub async fn refresh(&mut self) -> bool {
        self.lines.refresh().await
    }

    /// Charges `category` on the booking. Returns false if the store rejected
    /// the line, including when the category is already charged.
    pub async fn add(&mut self, category: &IncomeCategory, amount: Decimal, date: NaiveDate) -> bool {
        let line = AdditionalIncome {
            id: AdditionalIncomeId::new(),
            booking_id: self.booking,
            category_id: category.id,
            category_name: category.name.clone(),
            amount,
            date,
        };

        if self.lines.create(line).await.is_none() {
            return false;
        }

        info!(booking_id = %self.booking, category = %category.name, %amount, "Additional income added");
        self.notifier.notify(Notification::info(
            "Income added",
            format!("{} added to the booking.", category.name),
        ));
        true
    }

    /// Removes a line.
    pub async fn remove(&mut self, id: AdditionalIncomeId) -> bool {
        self.lines.delete(id).await
    }

    /// Sum of all loaded lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.items().iter().map(|line| line.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mandap_shared::types::IncomeCategoryId;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::notify::NotificationVariant;
    use crate::store::InMemoryStore;

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<Notification>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn category(name: &str) -> IncomeCategory {
        IncomeCategory {
            id: IncomeCategoryId::new(),
            name: name.into(),
        }
    }

    fn store() -> Arc<InMemoryStore<AdditionalIncome>> {
        Arc::new(InMemoryStore::<AdditionalIncome>::with_unique_key(
            AdditionalIncome::booking_category_key,
        ))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_total() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut income = AdditionalIncomeService::new(BookingId::new(), store(), notifier.clone());

        assert!(income.add(&category("Generator"), dec!(2500), date()).await);
        assert!(income.add(&category("Cleaning"), dec!(1200.50), date()).await);

        assert_eq!(income.lines().len(), 2);
        assert_eq!(income.total(), dec!(3700.50));
        let sent = notifier.0.lock().unwrap();
        assert!(sent.iter().all(|n| n.variant == NotificationVariant::Info));
    }

    #[tokio::test]
    async fn test_duplicate_category_returns_false_with_specific_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let generator = category("Generator");
        let mut income = AdditionalIncomeService::new(BookingId::new(), store(), notifier.clone());

        assert!(income.add(&generator, dec!(2500), date()).await);
        assert!(!income.add(&generator, dec!(3000), date()).await);

        assert_eq!(income.lines().len(), 1);
        assert_eq!(income.total(), dec!(2500));
        let sent = notifier.0.lock().unwrap();
        let last = sent.last().unwrap();
        assert_eq!(last.variant, NotificationVariant::Destructive);
        assert_eq!(last.description, DUPLICATE_CATEGORY_MESSAGE);
    }

    #[tokio::test]
    async fn test_same_category_on_other_booking_is_allowed() {
        let shared = store();
        let generator = category("Generator");
        let notifier = Arc::new(RecordingNotifier::default());
        let mut first = AdditionalIncomeService::new(BookingId::new(), shared.clone(), notifier.clone());
        let mut second = AdditionalIncomeService::new(BookingId::new(), shared.clone(), notifier);

        assert!(first.add(&generator, dec!(2500), date()).await);
        assert!(second.add(&generator, dec!(2500), date()).await);
        assert_eq!(shared.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_is_scoped_to_booking() {
        let shared = store();
        let notifier = Arc::new(RecordingNotifier::default());
        let booking = BookingId::new();
        let mut mine = AdditionalIncomeService::new(booking, shared.clone(), notifier.clone());
        let mut other = AdditionalIncomeService::new(BookingId::new(), shared.clone(), notifier.clone());

        assert!(mine.add(&category("Generator"), dec!(2500), date()).await);
        assert!(other.add(&category("Cleaning"), dec!(800), date()).await);

        let mut reloaded = AdditionalIncomeService::new(booking, shared, notifier);
        assert!(reloaded.refresh().await);
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].category_name, "Generator");

        let id = reloaded.lines()[0].id;
        assert!(reloaded.remove(id).await);
        assert_eq!(reloaded.total(), Decimal::ZERO);
    }
}

//! Store traits.

use std::fmt;
use std::future::Future;
use std::hash::Hash;

use mandap_shared::AppResult;
use mandap_shared::types::BookingId;

/// A record kept in the remote store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy + Eq + Ord + Hash + fmt::Display + Send + Sync + 'static;

    /// Human-readable entity name used in messages (e.g. "expense").
    const NAME: &'static str;

    /// This record's id.
    fn id(&self) -> Self::Id;

    /// Booking this record belongs to, if any.
    fn booking_id(&self) -> Option<BookingId> {
        None
    }
}

/// Repository trait for remote entity persistence.
///
/// Every call may fail. A uniqueness violation is reported as
/// `AppError::Conflict`; anything else is a generic failure.
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Inserts a new record and returns it as stored.
    fn create(&self, entity: E) -> impl Future<Output = AppResult<E>> + Send;

    /// Lists records, optionally only those belonging to `booking`.
    fn list(&self, booking: Option<BookingId>) -> impl Future<Output = AppResult<Vec<E>>> + Send;

    /// Replaces an existing record.
    fn update(&self, entity: E) -> impl Future<Output = AppResult<E>> + Send;

    /// Deletes a record by id.
    fn delete(&self, id: E::Id) -> impl Future<Output = AppResult<()>> + Send;
}

//! Local view of one entity list backed by a remote store.

use std::borrow::Cow;
use std::sync::Arc;

use mandap_shared::AppError;
use mandap_shared::types::BookingId;
use tracing::{debug, error, warn};

use super::repository::{Entity, EntityStore};
use crate::notify::{Notification, Notifier};

/// Entity list with create/read/update/delete through a store.
///
/// A failed call is logged and reported to the user as a destructive
/// notification. The local list only changes after a call succeeds.
pub struct EntityCollection<E: Entity, S: EntityStore<E>, N: Notifier> {
    store: Arc<S>,
    notifier: Arc<N>,
    booking: Option<BookingId>,
    conflict_message: Cow<'static, str>,
    items: Vec<E>,
}

impl<E: Entity, S: EntityStore<E>, N: Notifier> EntityCollection<E, S, N> {
    /// Creates an empty collection over every record in the store.
    #[must_use]
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self {
            store,
            notifier,
            booking: None,
            conflict_message: Cow::Owned(format!("This {} already exists.", E::NAME)),
            items: Vec::new(),
        }
    }

    /// Restricts the collection to records of one booking.
    #[must_use]
    pub fn for_booking(mut self, booking: BookingId) -> Self {
        self.booking = Some(booking);
        self
    }

    /// Sets the message shown when the store reports a conflict.
    #[must_use]
    pub fn with_conflict_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.conflict_message = message.into();
        self
    }

    /// Records currently held locally.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Booking this collection is scoped to.
    #[must_use]
    pub const fn booking(&self) -> Option<BookingId> {
        self.booking
    }

    /// Reloads the list from the store. Returns true on success.
    pub async fn refresh(&mut self) -> bool {
        match self.store.list(self.booking).await {
            Ok(items) => {
                debug!(entity = E::NAME, count = items.len(), "Loaded records");
                self.items = items;
                true
            }
            Err(e) => {
                self.report_failure("load", &e);
                false
            }
        }
    }

    /// Creates a record and appends it locally. Returns the stored record.
    pub async fn create(&mut self, entity: E) -> Option<E> {
        match self.store.create(entity).await {
            Ok(created) => {
                debug!(entity = E::NAME, id = %created.id(), "Created record");
                self.items.push(created.clone());
                Some(created)
            }
            Err(e) => {
                self.report_failure("create", &e);
                None
            }
        }
    }

    /// Replaces a record locally once the store accepts the update.
    pub async fn update(&mut self, entity: E) -> bool {
        match self.store.update(entity).await {
            Ok(updated) => {
                debug!(entity = E::NAME, id = %updated.id(), "Updated record");
                let id = updated.id();
                match self.items.iter_mut().find(|item| item.id() == id) {
                    Some(slot) => *slot = updated,
                    None => self.items.push(updated),
                }
                true
            }
            Err(e) => {
                self.report_failure("update", &e);
                false
            }
        }
    }

    /// Removes a record locally once the store confirms the delete.
    pub async fn delete(&mut self, id: E::Id) -> bool {
        match self.store.delete(id).await {
            Ok(()) => {
                debug!(entity = E::NAME, id = %id, "Deleted record");
                self.items.retain(|item| item.id() != id);
                true
            }
            Err(e) => {
                self.report_failure("delete", &e);
                false
            }
        }
    }

    fn report_failure(&self, action: &str, err: &AppError) {
        let description = if err.is_conflict() {
            warn!(entity = E::NAME, action, error = %err, "Store rejected duplicate record");
            self.conflict_message.to_string()
        } else {
            error!(
                entity = E::NAME,
                action,
                error = %err,
                code = err.error_code(),
                "Store call failed"
            );
            format!("Failed to {action} {}. Please try again.", E::NAME)
        };
        self.notifier
            .notify(Notification::destructive("Error", description));
    }
}

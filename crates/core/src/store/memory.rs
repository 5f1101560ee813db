//! In-process entity store.

use dashmap::DashMap;
use mandap_shared::types::BookingId;
use mandap_shared::{AppError, AppResult};

use super::repository::{Entity, EntityStore};

/// Extracts the value that must be unique across stored records.
pub type UniqueKey<E> = fn(&E) -> String;

/// `DashMap`-backed store for offline use and tests.
///
/// Lists come back in id order, which is creation order for UUID v7 ids.
pub struct InMemoryStore<E: Entity> {
    rows: DashMap<E::Id, E>,
    unique_key: Option<UniqueKey<E>>,
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryStore<E> {
    /// Creates an empty store without uniqueness constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            unique_key: None,
        }
    }

    /// Creates an empty store rejecting records whose key collides with an
    /// existing record.
    #[must_use]
    pub fn with_unique_key(key: UniqueKey<E>) -> Self {
        Self {
            rows: DashMap::new(),
            unique_key: Some(key),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_unique(&self, entity: &E) -> AppResult<()> {
        let Some(key_of) = self.unique_key else {
            return Ok(());
        };
        let key = key_of(entity);
        let clash = self
            .rows
            .iter()
            .any(|row| row.key() != &entity.id() && key_of(row.value()) == key);
        if clash {
            return Err(AppError::Conflict(format!("{} already exists: {key}", E::NAME)));
        }
        Ok(())
    }
}

impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn create(&self, entity: E) -> AppResult<E> {
        if self.rows.contains_key(&entity.id()) {
            return Err(AppError::Conflict(format!(
                "{} already exists: {}",
                E::NAME,
                entity.id()
            )));
        }
        self.check_unique(&entity)?;
        self.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn list(&self, booking: Option<BookingId>) -> AppResult<Vec<E>> {
        let mut rows: Vec<E> = self
            .rows
            .iter()
            .filter(|row| booking.is_none() || row.value().booking_id() == booking)
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(Entity::id);
        Ok(rows)
    }

    async fn update(&self, entity: E) -> AppResult<E> {
        if !self.rows.contains_key(&entity.id()) {
            return Err(AppError::NotFound(format!("{} {}", E::NAME, entity.id())));
        }
        self.check_unique(&entity)?;
        self.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: E::Id) -> AppResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} {id}", E::NAME)))
    }
}

//! Loading an exported snapshot of the hosted store.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use mandap_core::entities::{AdditionalIncome, Booking, Expense, Payment};
use mandap_core::notify::TracingNotifier;
use mandap_core::store::{Entity, EntityCollection, EntityStore, InMemoryStore};

/// JSON export with one array per entity.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Export {
    /// Bookings.
    pub bookings: Vec<Booking>,
    /// Customer payments and refunds.
    pub payments: Vec<Payment>,
    /// Additional income lines.
    pub additional_income: Vec<AdditionalIncome>,
    /// Expenses with their tax breakdown.
    pub expenses: Vec<Expense>,
}

impl Export {
    /// Reads an export file.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open export {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse export {}", path.display()))
    }
}

/// Records loaded back through the store seam.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Bookings.
    pub bookings: Vec<Booking>,
    /// Customer payments and refunds.
    pub payments: Vec<Payment>,
    /// Additional income lines.
    pub additional_income: Vec<AdditionalIncome>,
    /// Expenses with their tax breakdown.
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Seeds in-memory stores from `export` and reads every list back.
    pub async fn load(export: Export) -> Result<Self> {
        let additional_store = InMemoryStore::with_unique_key(
            AdditionalIncome::booking_category_key as fn(&AdditionalIncome) -> String,
        );

        let snapshot = Self {
            bookings: seed(InMemoryStore::new(), export.bookings).await?,
            payments: seed(InMemoryStore::new(), export.payments).await?,
            additional_income: seed(additional_store, export.additional_income).await?,
            expenses: seed(InMemoryStore::new(), export.expenses).await?,
        };

        info!(
            bookings = snapshot.bookings.len(),
            payments = snapshot.payments.len(),
            additional_income = snapshot.additional_income.len(),
            expenses = snapshot.expenses.len(),
            "Loaded export"
        );
        Ok(snapshot)
    }
}

async fn seed<E: Entity>(store: InMemoryStore<E>, rows: Vec<E>) -> Result<Vec<E>> {
    for row in rows {
        store
            .create(row)
            .await
            .with_context(|| format!("Invalid {} in export", E::NAME))?;
    }

    let mut collection = EntityCollection::new(Arc::new(store), Arc::new(TracingNotifier));
    if !collection.refresh().await {
        bail!("Failed to load {} records", E::NAME);
    }
    Ok(collection.items().to_vec())
}

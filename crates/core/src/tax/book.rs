//! Session-local list of tax rates.

use chrono::Utc;
use mandap_shared::config::DefaultTaxRate;
use mandap_shared::types::TaxRateId;
use rust_decimal::Decimal;

use super::error::TaxError;
use super::types::{TaxRate, TaxSelection};

/// In-memory tax rates, in creation order.
#[derive(Debug, Clone, Default)]
pub struct TaxRateBook {
    rates: Vec<TaxRate>,
}

impl TaxRateBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with configured defaults.
    ///
    /// Invalid defaults are skipped.
    #[must_use]
    pub fn with_defaults(defaults: &[DefaultTaxRate]) -> Self {
        let mut book = Self::new();
        for rate in defaults {
            if let Err(e) = book.add(&rate.name, rate.percentage) {
                tracing::warn!(error = %e, name = %rate.name, "Skipping invalid default tax rate");
            }
        }
        book
    }

    /// Adds a rate and returns it with its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `TaxError::EmptyName` for a blank name and
    /// `TaxError::NegativePercentage` for a negative percentage.
    pub fn add(&mut self, name: &str, percentage: Decimal) -> Result<TaxRate, TaxError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaxError::EmptyName);
        }
        if percentage.is_sign_negative() && !percentage.is_zero() {
            return Err(TaxError::NegativePercentage(percentage));
        }

        let rate = TaxRate {
            id: TaxRateId::new(),
            name: name.to_string(),
            percentage,
            created_at: Utc::now(),
        };
        self.rates.push(rate.clone());
        Ok(rate)
    }

    /// Removes a rate, returning it if it existed.
    pub fn remove(&mut self, id: TaxRateId) -> Option<TaxRate> {
        let index = self.rates.iter().position(|r| r.id == id)?;
        Some(self.rates.remove(index))
    }

    /// Looks up a rate by id.
    #[must_use]
    pub fn get(&self, id: TaxRateId) -> Option<&TaxRate> {
        self.rates.iter().find(|r| r.id == id)
    }

    /// Percentage for a selection; `None` when no rate applies.
    #[must_use]
    pub fn percentage_for(&self, selection: TaxSelection) -> Option<Decimal> {
        selection
            .rate_id()
            .and_then(|id| self.get(id))
            .map(|rate| rate.percentage)
    }

    /// Iterates rates in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxRate> {
        self.rates.iter()
    }

    /// Number of rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the book has no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

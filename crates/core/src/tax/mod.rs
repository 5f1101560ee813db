//! GST calculation and the session tax-rate list.
//!
//! Intra-state GST is split evenly between the central (CGST) and state
//! (SGST) components.

pub mod book;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use book::TaxRateBook;
pub use error::TaxError;
pub use service::TaxCalculator;
pub use types::{TaxCalculation, TaxRate, TaxSelection};

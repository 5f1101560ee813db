//! Core business logic for Mandap360.
//!
//! This crate contains pure business logic with no UI or transport code.
//! The remote store is reached only through the [`store::EntityStore`] trait.
//!
//! # Modules
//!
//! - `fiscal` - Indian financial year (April to March) and date ranges
//! - `tax` - GST calculation with the CGST/SGST split
//! - `filter` - Category, vendor, payment and date filtering of item lists
//! - `form` - Form values, validation errors and submission state
//! - `store` - Store seam and collections with the failure policy
//! - `reports` - Financial-year summaries

pub mod entities;
pub mod filter;
pub mod fiscal;
pub mod form;
pub mod notify;
pub mod reports;
pub mod store;
pub mod tax;

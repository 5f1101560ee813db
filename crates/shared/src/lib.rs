//! Shared types, errors, and configuration for Mandap360.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - Currency and date formatting for display
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod format;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

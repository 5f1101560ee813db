//! Remote entity store seam and local collections over it.
//!
//! The hosted store is reached only through [`EntityStore`]. Collections keep
//! a local copy of one entity list and apply the failure policy: log, notify
//! the user, and leave local state untouched.

pub mod collection;
pub mod income;
pub mod memory;
pub mod repository;

pub use collection::EntityCollection;
pub use income::AdditionalIncomeService;
pub use memory::InMemoryStore;
pub use repository::{Entity, EntityStore};

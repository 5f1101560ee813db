//! Form state: field values, per-field errors and a submitting flag.

pub mod error;
pub mod schema;
pub mod state;

pub use error::SubmitError;
pub use schema::{FormFieldError, FormSchema, ValidatorSchema};
pub use state::FormState;

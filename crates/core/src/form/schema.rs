//! Validation schemas for forms.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A validation finding for one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormFieldError {
    /// Field name.
    pub field: String,
    /// User-facing message.
    pub message: String,
}

impl FormFieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Checks form data and reports every problem found.
pub trait FormSchema<T> {
    /// Returns all findings; empty means valid.
    fn validate(&self, data: &T) -> Vec<FormFieldError>;
}

impl<T, F> FormSchema<T> for F
where
    F: Fn(&T) -> Vec<FormFieldError>,
{
    fn validate(&self, data: &T) -> Vec<FormFieldError> {
        self(data)
    }
}

/// Schema backed by a `validator::Validate` derive.
///
/// Findings are ordered by field name. A rule without a message falls back to
/// its code (e.g. `length`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorSchema;

impl<T: Validate> FormSchema<T> for ValidatorSchema {
    fn validate(&self, data: &T) -> Vec<FormFieldError> {
        let Err(errors) = data.validate() else {
            return Vec::new();
        };

        let mut findings: Vec<FormFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string);
                    FormFieldError::new(field.to_string(), message)
                })
            })
            .collect();
        findings.sort_by(|a, b| a.field.cmp(&b.field));
        findings
    }
}

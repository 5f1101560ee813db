//! Form state container.

use std::fmt;
use std::future::Future;

use super::error::SubmitError;
use super::schema::{FormFieldError, FormSchema};

/// Values, errors and submitting flag for one form.
///
/// Editing a field clears that field's errors only. Validation replaces the
/// whole error list.
pub struct FormState<T> {
    initial: T,
    data: T,
    errors: Vec<FormFieldError>,
    is_submitting: bool,
    schema: Option<Box<dyn FormSchema<T> + Send + Sync>>,
}

impl<T: fmt::Debug> fmt::Debug for FormState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("data", &self.data)
            .field("errors", &self.errors)
            .field("is_submitting", &self.is_submitting)
            .field("has_schema", &self.schema.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Clone> FormState<T> {
    /// Creates a form without a schema; `validate` always succeeds.
    pub fn new(initial: T) -> Self {
        Self {
            data: initial.clone(),
            initial,
            errors: Vec::new(),
            is_submitting: false,
            schema: None,
        }
    }

    /// Creates a form checked by `schema`.
    pub fn with_schema(initial: T, schema: impl FormSchema<T> + Send + Sync + 'static) -> Self {
        let mut form = Self::new(initial);
        form.schema = Some(Box::new(schema));
        form
    }

    /// Current values.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Current findings.
    pub fn errors(&self) -> &[FormFieldError] {
        &self.errors
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Sets the submitting flag.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }

    /// Edits `field` through `set`, then drops that field's errors.
    pub fn update_field(&mut self, field: &str, set: impl FnOnce(&mut T)) {
        set(&mut self.data);
        self.errors.retain(|e| e.field != field);
    }

    /// Edits several fields at once. Errors are left as they are.
    pub fn update_fields(&mut self, set: impl FnOnce(&mut T)) {
        set(&mut self.data);
    }

    /// Records an error reported from outside the schema (e.g. a store
    /// conflict).
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FormFieldError::new(field, message));
    }

    /// Runs the schema, replacing all errors. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        let Some(schema) = &self.schema else {
            return true;
        };
        self.errors = schema.validate(&self.data);
        self.errors.is_empty()
    }

    /// Restores the initial values and clears errors and the submitting flag.
    pub fn reset(&mut self) {
        self.data = self.initial.clone();
        self.errors.clear();
        self.is_submitting = false;
    }

    /// First error message for `field`.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Validates, then runs `op` on a snapshot of the values.
    ///
    /// The submitting flag is set while `op` runs and cleared afterwards,
    /// whatever the outcome, including when the returned future is dropped
    /// before it completes.
    pub async fn submit<F, Fut, R, E>(&mut self, op: F) -> Result<R, SubmitError<E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        if !self.validate() {
            return Err(SubmitError::Invalid);
        }

        let data = self.data.clone();
        let _submitting = SubmittingGuard::set(&mut self.is_submitting);
        op(data).await.map_err(SubmitError::Failed)
    }
}

/// Keeps the submitting flag set until dropped.
struct SubmittingGuard<'a>(&'a mut bool);

impl<'a> SubmittingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

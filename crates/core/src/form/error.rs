//! Form submission errors.

use thiserror::Error;

/// Why a submission did not complete.
#[derive(Debug, Error)]
pub enum SubmitError<E> {
    /// Validation found errors; the operation was not run.
    #[error("form has validation errors")]
    Invalid,

    /// The operation ran and failed.
    #[error("submission failed: {0}")]
    Failed(E),
}

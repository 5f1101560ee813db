//! Financial year error types.

use thiserror::Error;

/// Errors raised while parsing or constructing fiscal values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiscalError {
    /// A financial-year label such as `2023-24` could not be parsed.
    #[error("invalid financial year label: {0}")]
    InvalidLabel(String),

    /// End year was not start year + 1.
    #[error("financial year {start_year}-{end_year} must span consecutive years")]
    NonConsecutiveYears {
        /// Start year.
        start_year: i32,
        /// End year.
        end_year: i32,
    },

    /// Item date was neither `YYYY-MM-DD` nor RFC 3339.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Timezone name not present in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

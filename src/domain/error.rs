//! Domain validation errors for core forecasting types.
//!
//! These errors are returned when a request or a dataset violates a domain
//! rule: a date that cannot be read as a calendar day, or a categorical
//! column that produced no categories at all.
//!
//! # Examples
//!
//! ```
//! use menucast::domain::calendar::parse_date;
//! use menucast::domain::error::DomainError;
//!
//! let result = parse_date("not-a-date");
//! assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request body did not carry a `date` field.
    #[error("Missing date in request")]
    MissingDate,

    /// The `date` field was present but not a string.
    #[error("date must be a string, got {found}")]
    DateNotString {
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// The input could not be parsed as a calendar date.
    #[error("invalid date '{input}': expected a calendar date such as 2024-12-25")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
    },

    /// A categorical column expanded to zero categories.
    #[error("column '{column}' has no categories to encode")]
    EmptyCategory {
        /// Name of the categorical column.
        column: &'static str,
    },

    /// Two schema columns ended up with the same name.
    #[error("duplicate feature column '{column}'")]
    DuplicateColumn {
        /// The column name that appears more than once.
        column: String,
    },
}

//! Error types for the naming engine and its stores.

use nomos_config::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors reported by a record store, rule catalog or config store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The name is already held by another record.
    #[error("Name '{name}' violates the unique constraint")]
    UniqueViolation { name: String },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Store operation failed: {reason}")]
    Backend { reason: String },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the naming engine.
///
/// Duplicate names and missing rules are not errors; they show up as
/// warnings, validation findings or [`Registration::NameTaken`](crate::Registration).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamingError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },
}

impl NamingError {
    /// Create an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for naming engine operations.
pub type NamingResult<T> = Result<T, NamingError>;

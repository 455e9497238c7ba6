//! Configuration error types.
//!
//! Domain-specific errors raised while constructing, parsing, or checking
//! naming configurations and best-practice reference data.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised by the naming configuration layer.
///
/// These never come from the pure name-building rules (assembly and case
/// transformation are total functions). They are raised when a value is
/// parsed from text or when a configuration is checked before it is handed
/// to a store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Required configuration missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid character class '{pattern}': {reason}")]
    InvalidCharacterClass { pattern: String, reason: String },

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: String, value: String },
}

impl ConfigurationError {
    /// Create an `UnknownVariant` error for a value that does not name a known variant.
    pub fn unknown_variant(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a `RequiredFieldMissing` error.
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

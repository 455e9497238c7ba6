use nomos_core::NamingError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the Nomos CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command-line arguments cannot be processed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The name is already registered.
    #[error("Name '{0}' is already registered")]
    NameTaken(String),

    /// A requested record, rule or config does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Naming(#[from] NamingError),

    /// A result could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Output(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Output(e.to_string())
    }
}

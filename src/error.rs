//! # Structured Error Handling
//!
//! Error types for the content query core, using thiserror for structured
//! variants instead of `Box<dyn Error>` patterns.

use thiserror::Error;

/// Errors surfaced by the content query core.
///
/// Argument validation fails at filter-call time; class resolution fails at
/// filter-call time; execution errors surface when a round trip to the
/// engine is made (tree scope resolution, keyword resolution, paginator
/// fetch/count).
#[derive(Error, Debug)]
pub enum ContentStoreError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unknown content class alias: {alias}")]
    ClassResolution { alias: String },

    #[error("Query execution error: {source}")]
    Execution {
        #[from]
        source: sqlx::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ContentStoreError {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for ContentStoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentStoreError>;

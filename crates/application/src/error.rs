//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Startup checks found fatal problems; details were already reported
    #[error("Invalid configuration")]
    InvalidConfiguration,

    /// A structured value could not be parsed
    #[error("Structured value error: {0}")]
    StructuredValue(String),

    /// Configuration source error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

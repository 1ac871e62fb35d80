//! Infrastructure errors

use thiserror::Error;

/// Errors raised by infrastructure adapters
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Reading or deserializing configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Logging could not be initialised
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<InfrastructureError> for application::ApplicationError {
    fn from(err: InfrastructureError) -> Self {
        Self::Configuration(err.to_string())
    }
}

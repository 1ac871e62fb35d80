//! Logging initialization
//!
//! Log lines go to stderr so machine-readable output on stdout stays clean.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CheckerConfig, LogFormat};
use crate::error::InfrastructureError;

/// Build the log filter
///
/// `RUST_LOG` takes precedence over the configured filter.
fn build_filter(config: &CheckerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &CheckerConfig) -> Result<(), InfrastructureError> {
    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| InfrastructureError::Telemetry(e.to_string()))
}

//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: configuration
//! sources, the structured value parser and the tracing-backed reporter.
//! Also owns the checker's own settings and logging setup.

pub mod adapters;
pub mod config;
pub mod error;
pub mod telemetry;

pub use adapters::*;
pub use config::{CheckerConfig, LogFormat};
pub use error::InfrastructureError;
pub use telemetry::init_logging;

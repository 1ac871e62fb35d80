//! Infrastructure adapters
//!
//! Implementations of application ports.

mod env_config_source;
mod file_config_source;
mod json_map_parser;
mod tracing_reporter;

pub use env_config_source::EnvConfigSource;
pub use file_config_source::FileConfigSource;
pub use json_map_parser::JsonMapParser;
pub use tracing_reporter::TracingValidationReporter;

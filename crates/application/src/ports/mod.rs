//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod config_source_port;
mod structured_value_parser_port;
mod validation_reporter_port;

#[cfg(test)]
pub use config_source_port::MockConfigSourcePort;
pub use config_source_port::ConfigSourcePort;
#[cfg(test)]
pub use structured_value_parser_port::MockStructuredValueParserPort;
pub use structured_value_parser_port::StructuredValueParserPort;
#[cfg(test)]
pub use validation_reporter_port::MockValidationReporterPort;
pub use validation_reporter_port::ValidationReporterPort;

//! Application layer - Use cases and orchestration
//!
//! Defines the ports the startup checks depend on and the service that
//! captures a snapshot, evaluates the rule set and reports the outcome.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

//! Application services - Use case implementations

mod startup_validation_service;

pub use startup_validation_service::StartupValidationService;

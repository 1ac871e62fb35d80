//! Domain layer for the auth startup checks
//!
//! Contains the configuration snapshot, the rule set and the evaluator.
//! This layer performs no I/O and does not log.

pub mod keys;
pub mod snapshot;
pub mod validation;
pub mod value_objects;

pub use snapshot::{ConfigurationSnapshot, StructuredValue};
pub use validation::{
    Check, ConfigValidator, Diagnostic, RULE_SET, Rule, Severity, ValidationOutcome, find_rule,
};
pub use value_objects::*;

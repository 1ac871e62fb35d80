//! Startup configuration validation
//!
//! Rules are pure functions over a [`ConfigurationSnapshot`](crate::ConfigurationSnapshot).
//! The evaluator reduces their diagnostics into a [`ValidationOutcome`].

mod diagnostic;
mod evaluator;
mod outcome;
mod rule;
mod rule_set;
mod severity;

pub use diagnostic::Diagnostic;
pub use evaluator::ConfigValidator;
pub use outcome::ValidationOutcome;
pub use rule::{Check, Rule};
pub use rule_set::{RULE_SET, find_rule};
pub use severity::Severity;

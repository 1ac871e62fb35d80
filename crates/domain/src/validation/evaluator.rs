//! Rule evaluation

use crate::snapshot::ConfigurationSnapshot;

use super::{Diagnostic, RULE_SET, Rule, ValidationOutcome};

/// Runs the rule set against a configuration snapshot
///
/// Every rule runs on every pass; a violation never stops later rules from
/// being checked, so one pass reports every problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Diagnostics from [`RULE_SET`], in rule order
    #[must_use]
    pub fn diagnostics(snapshot: &ConfigurationSnapshot) -> Vec<Diagnostic> {
        Self::diagnostics_with(RULE_SET, snapshot)
    }

    /// Diagnostics from an arbitrary rule slice, in rule order
    #[must_use]
    pub fn diagnostics_with(rules: &[Rule], snapshot: &ConfigurationSnapshot) -> Vec<Diagnostic> {
        rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect()
    }

    /// Evaluate [`RULE_SET`] into an outcome
    #[must_use]
    pub fn evaluate(snapshot: &ConfigurationSnapshot) -> ValidationOutcome {
        Self::evaluate_with(RULE_SET, snapshot)
    }

    /// Evaluate an arbitrary rule slice into an outcome
    #[must_use]
    pub fn evaluate_with(rules: &[Rule], snapshot: &ConfigurationSnapshot) -> ValidationOutcome {
        ValidationOutcome::from_diagnostics(&Self::diagnostics_with(rules, snapshot))
    }
}

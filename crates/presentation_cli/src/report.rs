//! Output rendering for the `check` and `rules` commands

use domain::{Diagnostic, Rule, ValidationOutcome};
use serde::Serialize;

/// Machine-readable result of a `check --format json` run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub fatal: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let outcome = ValidationOutcome::from_diagnostics(&diagnostics);
        Self {
            fatal: outcome.is_fatal(),
            errors: outcome.errors,
            warnings: outcome.warnings,
            diagnostics,
        }
    }
}

/// One line per rule: code, severity, description
pub fn render_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|rule| format!("{:<8}{:<9}{}", rule.code, rule.severity.to_string(), rule.describe()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary line for a passing text-mode check
pub fn render_summary(outcome: &ValidationOutcome) -> String {
    match outcome.warnings.len() {
        0 => "✅ Configuration valid".to_string(),
        1 => "✅ Configuration valid (1 warning)".to_string(),
        n => format!("✅ Configuration valid ({n} warnings)"),
    }
}

#[cfg(test)]
mod tests {
    use domain::RULE_SET;

    use super::*;

    #[test]
    fn report_partitions_diagnostics() {
        let report = CheckReport::from_diagnostics(vec![
            Diagnostic::warning("CFG001", "old key"),
            Diagnostic::error("CFG003", "missing key"),
        ]);

        assert!(report.fatal);
        assert_eq!(report.errors, vec!["missing key"]);
        assert_eq!(report.warnings, vec!["old key"]);
        assert_eq!(report.diagnostics.len(), 2);
    }

    #[test]
    fn report_serializes_expected_fields() {
        let report = CheckReport::from_diagnostics(vec![Diagnostic::warning("CFG007", "retiring")]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["fatal"], false);
        assert_eq!(json["warnings"][0], "retiring");
        assert_eq!(json["diagnostics"][0]["code"], "CFG007");
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
    }

    #[test]
    fn empty_report_is_not_fatal() {
        let report = CheckReport::from_diagnostics(Vec::new());
        assert!(!report.fatal);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn rules_listing_has_one_line_per_rule() {
        let listing = render_rules(RULE_SET);

        assert_eq!(listing.lines().count(), RULE_SET.len());
        assert!(listing.lines().next().is_some_and(|l| l.starts_with("CFG001")));
        assert!(listing.contains("ERROR"));
    }

    #[test]
    fn summary_counts_warnings() {
        let mut outcome = ValidationOutcome::default();
        assert_eq!(render_summary(&outcome), "✅ Configuration valid");

        outcome.warnings.push("a".into());
        assert!(render_summary(&outcome).ends_with("(1 warning)"));

        outcome.warnings.push("b".into());
        assert!(render_summary(&outcome).ends_with("(2 warnings)"));
    }
}

//! Aggregated result of one validation pass

use serde::Serialize;

use super::Diagnostic;

/// Errors and warnings collected from every rule, in evaluation order
///
/// The outcome is fatal if and only if `errors` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Messages of fatal diagnostics
    pub errors: Vec<String>,
    /// Messages of advisory diagnostics
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    /// Partition diagnostics by severity, keeping their order
    #[must_use]
    pub fn from_diagnostics<'a, I>(diagnostics: I) -> Self
    where
        I: IntoIterator<Item = &'a Diagnostic>,
    {
        let (errors, warnings): (Vec<_>, Vec<_>) = diagnostics
            .into_iter()
            .partition(|diagnostic| diagnostic.is_fatal());

        Self {
            errors: errors.into_iter().map(|d| d.message.clone()).collect(),
            warnings: warnings.into_iter().map(|d| d.message.clone()).collect(),
        }
    }

    /// Check if startup must be refused
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if no rule fired at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// All error messages, one per line
    #[must_use]
    pub fn error_report(&self) -> String {
        self.errors.join("\n")
    }
}

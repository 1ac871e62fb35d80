//! A single finding produced by a rule

use std::fmt;

use serde::Serialize;

use super::Severity;

/// Finding produced when a rule is violated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Code of the rule that produced this diagnostic
    pub code: &'static str,
    /// Whether the finding blocks startup
    pub severity: Severity,
    /// Operator-facing message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    #[must_use]
    pub fn new(code: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
        }
    }

    /// Create a fatal diagnostic
    #[must_use]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    /// Create an advisory diagnostic
    #[must_use]
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, message)
    }

    /// Check if this diagnostic blocks startup
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.severity.is_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

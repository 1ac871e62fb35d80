//! Diagnostic severity

use std::fmt;

use serde::Serialize;

/// Severity of a rule's diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory - logged, startup continues
    Warning,
    /// Fatal - startup is refused
    Error,
}

impl Severity {
    /// Check if this severity blocks startup
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

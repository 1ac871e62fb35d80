//! Validation reporter port
//!
//! Logging sink for the outcome of the startup checks.

#[cfg(test)]
use mockall::automock;

/// Port for emitting validation results
#[cfg_attr(test, automock)]
pub trait ValidationReporterPort: Send + Sync {
    /// Emit the combined fatal report (one error per line)
    fn report_errors(&self, report: &str);

    /// Emit a single advisory message
    fn report_warning(&self, message: &str);
}

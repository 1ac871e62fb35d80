//! Startup validation service
//!
//! Captures a configuration snapshot from a source, runs the rule set and
//! hands the outcome to a reporter. Fatal outcomes are returned as
//! [`ApplicationError::InvalidConfiguration`] so the host can refuse to start.

use std::fmt;
use std::sync::Arc;

use domain::keys::{RECOGNIZED_KEYS, STRUCTURED_KEYS};
use domain::{ConfigValidator, ConfigurationSnapshot, Diagnostic, StructuredValue, ValidationOutcome};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{ConfigSourcePort, StructuredValueParserPort, ValidationReporterPort};

/// Runs the startup checks against a configuration source
pub struct StartupValidationService {
    source: Arc<dyn ConfigSourcePort>,
    parser: Arc<dyn StructuredValueParserPort>,
    reporter: Arc<dyn ValidationReporterPort>,
}

impl fmt::Debug for StartupValidationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartupValidationService")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}

impl StartupValidationService {
    /// Create a new startup validation service
    pub fn new(
        source: Arc<dyn ConfigSourcePort>,
        parser: Arc<dyn StructuredValueParserPort>,
        reporter: Arc<dyn ValidationReporterPort>,
    ) -> Self {
        Self {
            source,
            parser,
            reporter,
        }
    }

    /// Read every recognised key and parse structured values
    #[instrument(skip(self), fields(source = %self.source.name()))]
    pub fn capture_snapshot(&self) -> ConfigurationSnapshot {
        let mut snapshot = ConfigurationSnapshot::new();
        for key in RECOGNIZED_KEYS {
            if let Some(value) = self.source.get(key) {
                snapshot = snapshot.with_value(*key, value);
            }
        }

        for key in STRUCTURED_KEYS {
            let Some(raw) = snapshot.get(key).filter(|v| !v.is_empty()).map(str::to_owned) else {
                continue;
            };
            let parsed = match self.parser.parse_map(&raw) {
                Ok(map) => StructuredValue::Parsed(map),
                Err(e) => {
                    debug!(key = %key, error = %e, "Structured value did not parse");
                    StructuredValue::Invalid(e.to_string())
                },
            };
            snapshot = snapshot.with_structured(*key, parsed);
        }

        debug!(
            values = snapshot.len(),
            keys = ?snapshot.keys().collect::<Vec<_>>(),
            "Configuration snapshot captured"
        );
        snapshot
    }

    /// Diagnostics for the current configuration, with rule codes
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        ConfigValidator::diagnostics(&self.capture_snapshot())
    }

    /// Evaluate the current configuration without reporting
    pub fn evaluate(&self) -> ValidationOutcome {
        ConfigValidator::evaluate(&self.capture_snapshot())
    }

    /// Evaluate and report the current configuration
    ///
    /// Returns the outcome when startup may proceed.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<ValidationOutcome, ApplicationError> {
        let outcome = self.evaluate();
        self.report(&outcome)?;
        info!(
            warnings = outcome.warnings.len(),
            "Startup configuration checks passed"
        );
        Ok(outcome)
    }

    /// Hand an outcome to the reporter
    ///
    /// A fatal outcome is reported as one combined message and no warnings
    /// are emitted; otherwise each warning is reported on its own.
    pub fn report(&self, outcome: &ValidationOutcome) -> Result<(), ApplicationError> {
        if outcome.is_fatal() {
            self.reporter.report_errors(&outcome.error_report());
            return Err(ApplicationError::InvalidConfiguration);
        }

        for warning in &outcome.warnings {
            self.reporter.report_warning(warning);
        }
        Ok(())
    }
}

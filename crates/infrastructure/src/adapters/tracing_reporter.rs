//! Tracing-backed validation reporter

use application::ports::ValidationReporterPort;
use tracing::{error, warn};

/// Reports validation results through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingValidationReporter;

impl TracingValidationReporter {
    /// Create a new reporter
    pub const fn new() -> Self {
        Self
    }
}

impl ValidationReporterPort for TracingValidationReporter {
    fn report_errors(&self, report: &str) {
        error!(
            error_count = report.lines().count(),
            "Invalid configuration:\n{report}"
        );
    }

    fn report_warning(&self, message: &str) {
        warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner))
                .into_owned()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn errors_logged_at_error_level() {
        let output = capture(|| {
            TracingValidationReporter::new().report_errors("missing A\nmissing B");
        });

        assert!(output.contains("ERROR"));
        assert!(output.contains("missing A"));
        assert!(output.contains("missing B"));
        assert!(output.contains("error_count=2"));
    }

    #[test]
    fn warnings_logged_at_warn_level() {
        let output = capture(|| {
            TracingValidationReporter::new().report_warning("deprecated key");
        });

        assert!(output.contains("WARN"));
        assert!(output.contains("deprecated key"));
    }
}

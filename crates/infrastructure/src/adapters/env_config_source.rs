//! Environment-based configuration source
//!
//! Reads configuration values from process environment variables.

use std::env;

use application::ports::ConfigSourcePort;
use tracing::warn;

/// Configuration source backed by the process environment
///
/// With a prefix, key `AUTH_CLIENT_URL` is read from `{PREFIX}_AUTH_CLIENT_URL`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigSource {
    /// Optional prefix for all environment variable lookups
    prefix: Option<String>,
}

impl EnvConfigSource {
    /// Create a new environment configuration source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a prefix for all environment variable lookups
    ///
    /// # Example
    /// ```
    /// use infrastructure::adapters::EnvConfigSource;
    ///
    /// let source = EnvConfigSource::with_prefix("STAGING");
    /// // Looking up "AUTH_CLIENT_URL" will check "STAGING_AUTH_CLIENT_URL"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn env_var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{key}"),
            None => key.to_string(),
        }
    }
}

impl ConfigSourcePort for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        let env_var = self.env_var_name(key);
        match env::var(&env_var) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            // Still counts as set; the rules only check presence.
            Err(env::VarError::NotUnicode(raw)) => {
                warn!(env_var = %env_var, "Environment variable is not valid UTF-8");
                Some(raw.to_string_lossy().into_owned())
            },
        }
    }

    fn name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("environment ({prefix}_*)"),
            None => "environment".to_string(),
        }
    }
}

//! Checker settings
//!
//! Settings for the checker itself, not for the configuration it inspects.
//! Loaded from defaults overridden by `AUTH_ENV_CHECK_*` environment
//! variables (e.g. `AUTH_ENV_CHECK_LOG_FORMAT=json`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InfrastructureError;

/// Environment variable prefix for checker settings
pub const ENV_PREFIX: &str = "AUTH_ENV_CHECK";

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Get the display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Checker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Log level filter (e.g., "warn", "application=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl CheckerConfig {
    /// Load settings from defaults and the process environment
    pub fn load() -> Result<Self, InfrastructureError> {
        Self::load_with(Self::environment())
    }

    /// Load settings with an explicit environment source
    pub fn load_with(environment: config::Environment) -> Result<Self, InfrastructureError> {
        let settings = config::Config::builder()
            .set_default("log_filter", default_log_filter())?
            .set_default("log_format", LogFormat::default().display_name())?
            // Override with environment variables (e.g., AUTH_ENV_CHECK_LOG_FILTER)
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }
}

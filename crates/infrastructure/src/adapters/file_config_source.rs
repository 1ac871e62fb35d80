//! File-based configuration source
//!
//! Loads a flat file of key/value pairs (TOML, JSON or YAML, chosen by
//! extension) so a deployment's settings can be checked before rollout.

use std::collections::HashMap;
use std::path::Path;

use application::ports::ConfigSourcePort;
use tracing::debug;

use crate::error::InfrastructureError;

/// Configuration source backed by a settings file
///
/// Keys are matched case-insensitively. Scalar values such as booleans
/// and numbers are read as their string form.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: String,
    values: HashMap<String, String>,
}

impl FileConfigSource {
    /// Load a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?;

        let raw: HashMap<String, String> = settings.try_deserialize()?;
        let values = raw
            .into_iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v))
            .collect::<HashMap<_, _>>();

        debug!(path = %path.display(), values = values.len(), "Loaded settings file");

        Ok(Self {
            path: path.display().to_string(),
            values,
        })
    }

    /// Number of entries read from the file
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the file held no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSourcePort for FileConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(&key.to_ascii_uppercase()).cloned()
    }

    fn name(&self) -> String {
        format!("file ({})", self.path)
    }
}

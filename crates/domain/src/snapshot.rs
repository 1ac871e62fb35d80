//! Configuration snapshot
//!
//! An immutable view of every configuration value available at startup.
//! Rules only ever read from a snapshot, so they can be tested with a
//! constructed snapshot instead of touching the process environment.

use std::collections::BTreeMap;
use std::fmt;

/// Result of parsing a value that holds a serialized map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredValue {
    /// The value parsed into a string-to-string map
    Parsed(BTreeMap<String, String>),
    /// The value could not be parsed; carries the parser's reason
    Invalid(String),
}

impl StructuredValue {
    /// Check if parsing failed
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Get the parsed map, if any
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Parsed(map) => Some(map),
            Self::Invalid(_) => None,
        }
    }
}

/// Fully-resolved configuration values for one validation pass
///
/// Absent keys and keys holding an empty string are both treated as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigurationSnapshot {
    values: BTreeMap<String, String>,
    structured: BTreeMap<String, StructuredValue>,
}

impl ConfigurationSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            structured: BTreeMap::new(),
        }
    }

    /// Add a raw value
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Attach the parse result of a structured value
    #[must_use]
    pub fn with_structured(mut self, key: impl Into<String>, value: StructuredValue) -> Self {
        self.structured.insert(key.into(), value);
        self
    }

    /// Raw value for a key, including empty strings
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if a key is absent or empty
    #[must_use]
    pub fn is_unset(&self, key: &str) -> bool {
        self.get(key).is_none_or(str::is_empty)
    }

    /// Check if a key holds a non-empty value
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        !self.is_unset(key)
    }

    /// Read a boolean feature flag
    ///
    /// Only `true` (case-insensitive, surrounding whitespace ignored) enables a flag.
    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.get(flag)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Parse result for a structured key, if it was parsed
    #[must_use]
    pub fn structured(&self, key: &str) -> Option<&StructuredValue> {
        self.structured.get(key)
    }

    /// Keys with a raw value (set or empty), in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of raw values held
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no raw values are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Values include secrets; only key names are printed.
impl fmt::Debug for ConfigurationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationSnapshot")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .field("structured", &self.structured.keys().collect::<Vec<_>>())
            .finish()
    }
}

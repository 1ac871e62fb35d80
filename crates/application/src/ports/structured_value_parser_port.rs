//! Structured value parser port
//!
//! Parses a single configuration value holding a serialized map.

use std::collections::BTreeMap;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for parsing serialized string maps
#[cfg_attr(test, automock)]
pub trait StructuredValueParserPort: Send + Sync {
    /// Parse `raw` into a string-to-string map
    ///
    /// Returns [`ApplicationError::StructuredValue`] when `raw` is not a
    /// well-formed map of strings.
    fn parse_map(&self, raw: &str) -> Result<BTreeMap<String, String>, ApplicationError>;
}

//! JSON map parser
//!
//! Parses values such as `AUTH_JWT_CUSTOM_CLAIMS`, which hold a JSON
//! object of string values.

use std::collections::BTreeMap;

use application::{ApplicationError, ports::StructuredValueParserPort};

/// Parses a JSON object whose values are all strings
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMapParser;

impl JsonMapParser {
    /// Create a new parser
    pub const fn new() -> Self {
        Self
    }
}

impl StructuredValueParserPort for JsonMapParser {
    fn parse_map(&self, raw: &str) -> Result<BTreeMap<String, String>, ApplicationError> {
        serde_json::from_str(raw).map_err(|e| {
            ApplicationError::StructuredValue(format!("Failed to parse JSON map: {e}"))
        })
    }
}

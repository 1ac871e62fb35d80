//! Configuration source port
//!
//! Supplies raw configuration values by key.

#[cfg(test)]
use mockall::automock;

/// Port for reading raw configuration values
///
/// Implementations may read the process environment, a file, or an
/// in-memory map. An empty string is returned as-is; deciding whether it
/// counts as unset is up to the rules.
#[cfg_attr(test, automock)]
pub trait ConfigSourcePort: Send + Sync {
    /// Raw value for `key`, or `None` if the source has no entry
    fn get(&self, key: &str) -> Option<String>;

    /// Short name of the source, used in logs
    fn name(&self) -> String;
}

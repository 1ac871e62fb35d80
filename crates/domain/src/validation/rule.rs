//! Validation rules
//!
//! A [`Rule`] pairs a [`Check`] with a code and a severity. Rules are
//! stateless and independent: each reads the snapshot and yields at most
//! one [`Diagnostic`].

use crate::snapshot::{ConfigurationSnapshot, StructuredValue};
use crate::value_objects::SmsProvider;

use super::{Diagnostic, Severity};

/// The condition a rule tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Key is deprecated and replaced by another key
    Superseded {
        key: &'static str,
        replacement: &'static str,
    },
    /// Key is deprecated and its feature is going away
    Retiring {
        key: &'static str,
        advice: &'static str,
    },
    /// Key holds a serialized map that failed to parse
    StructuredMap { key: &'static str },
    /// Key must always be set
    Required { key: &'static str },
    /// Selector key must name a supported SMS provider
    ProviderSelector { key: &'static str },
    /// Key must be set when the selector names `provider`
    ProviderRequired {
        selector: &'static str,
        provider: SmsProvider,
        key: &'static str,
    },
    /// Key must be set when `flag` is enabled
    FlagRequired {
        flag: &'static str,
        feature: &'static str,
        key: &'static str,
    },
    /// At least one of `keys` must be set when `flag` is enabled
    FlagAnyOf {
        flag: &'static str,
        feature: &'static str,
        keys: &'static [&'static str],
    },
}

/// A named check with a fixed severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Stable identifier, e.g. `CFG003`
    pub code: &'static str,
    pub severity: Severity,
    pub check: Check,
}

impl Rule {
    /// Warn when a superseded key is set
    #[must_use]
    pub const fn superseded(code: &'static str, key: &'static str, replacement: &'static str) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            check: Check::Superseded { key, replacement },
        }
    }

    /// Warn when a key for a retiring feature is set
    #[must_use]
    pub const fn retiring(code: &'static str, key: &'static str, advice: &'static str) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            check: Check::Retiring { key, advice },
        }
    }

    /// Warn when a structured key is set but unparseable
    #[must_use]
    pub const fn structured_map(code: &'static str, key: &'static str) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            check: Check::StructuredMap { key },
        }
    }

    /// Fail when a key is unset
    #[must_use]
    pub const fn required(code: &'static str, key: &'static str) -> Self {
        Self {
            code,
            severity: Severity::Error,
            check: Check::Required { key },
        }
    }

    /// Fail when the SMS selector is unset or unsupported
    #[must_use]
    pub const fn provider_selector(code: &'static str, key: &'static str) -> Self {
        Self {
            code,
            severity: Severity::Error,
            check: Check::ProviderSelector { key },
        }
    }

    /// Fail when `provider` is selected and `key` is unset
    #[must_use]
    pub const fn provider_required(
        code: &'static str,
        selector: &'static str,
        provider: SmsProvider,
        key: &'static str,
    ) -> Self {
        Self {
            code,
            severity: Severity::Error,
            check: Check::ProviderRequired {
                selector,
                provider,
                key,
            },
        }
    }

    /// Fail when `flag` is enabled and `key` is unset
    #[must_use]
    pub const fn flag_required(
        code: &'static str,
        flag: &'static str,
        feature: &'static str,
        key: &'static str,
    ) -> Self {
        Self {
            code,
            severity: Severity::Error,
            check: Check::FlagRequired { flag, feature, key },
        }
    }

    /// Fail when `flag` is enabled and none of `keys` is set
    #[must_use]
    pub const fn flag_any_of(
        code: &'static str,
        flag: &'static str,
        feature: &'static str,
        keys: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            severity: Severity::Error,
            check: Check::FlagAnyOf { flag, feature, keys },
        }
    }

    /// Run the check against a snapshot
    ///
    /// Returns `None` when the rule holds.
    #[must_use]
    pub fn evaluate(&self, snapshot: &ConfigurationSnapshot) -> Option<Diagnostic> {
        self.violation(snapshot)
            .map(|message| Diagnostic::new(self.code, self.severity, message))
    }

    fn violation(&self, snapshot: &ConfigurationSnapshot) -> Option<String> {
        match &self.check {
            Check::Superseded { key, replacement } => snapshot.is_set(key).then(|| {
                format!(
                    "The '{key}' environment variable is deprecated. Use '{replacement}' instead"
                )
            }),
            Check::Retiring { key, advice } => snapshot.is_set(key).then(|| {
                format!(
                    "The '{key}' environment variable is deprecated, and the feature will be deactivated soon. {advice}"
                )
            }),
            // The snapshot capture attaches a parse result to every set structured key.
            Check::StructuredMap { key } => (snapshot.is_set(key)
                && snapshot
                    .structured(key)
                    .is_some_and(StructuredValue::is_invalid))
            .then(|| format!("Impossible to parse '{key}'. It will therefore be deactivated")),
            Check::Required { key } => snapshot
                .is_unset(key)
                .then(|| format!("No value was provided for required env var {key}")),
            Check::ProviderSelector { key } => {
                match SmsProvider::from_selector(snapshot.get(key)) {
                    SmsProvider::Unrecognized(raw) => Some(format!(
                        "Incorrect SMS provider - {key} of value '{}' is not one of the supported. Supported providers are: {}",
                        raw.unwrap_or_default(),
                        quoted_list(SmsProvider::SUPPORTED)
                    )),
                    SmsProvider::Twilio | SmsProvider::Alicloud => None,
                }
            },
            Check::ProviderRequired {
                selector,
                provider,
                key,
            } => (SmsProvider::from_selector(snapshot.get(selector)) == *provider
                && snapshot.is_unset(key))
            .then(|| {
                format!(
                    "Env var {key} is required when the {} is set as SMS provider, but no value was provided",
                    provider.display_name()
                )
            }),
            Check::FlagRequired { flag, feature, key } => (snapshot.is_enabled(flag)
                && snapshot.is_unset(key))
            .then(|| {
                format!(
                    "Env var {key} is required when the {feature} is enabled, but no value was provided"
                )
            }),
            Check::FlagAnyOf { flag, feature, keys } => (snapshot.is_enabled(flag)
                && keys.iter().all(|k| snapshot.is_unset(k)))
            .then(|| {
                format!(
                    "{feature} requires at least on of the following to be set: {}",
                    quoted_list(keys)
                )
            }),
        }
    }

    /// Keys this rule reads
    #[must_use]
    pub fn reads(&self) -> Vec<&'static str> {
        match &self.check {
            Check::Superseded { key, .. }
            | Check::Retiring { key, .. }
            | Check::StructuredMap { key }
            | Check::Required { key }
            | Check::ProviderSelector { key } => vec![*key],
            Check::ProviderRequired { selector, key, .. } => vec![*selector, *key],
            Check::FlagRequired { flag, key, .. } => vec![*flag, *key],
            Check::FlagAnyOf { flag, keys, .. } => {
                let mut read = vec![*flag];
                read.extend_from_slice(keys);
                read
            },
        }
    }

    /// One-line description for rule listings
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.check {
            Check::Superseded { key, replacement } => {
                format!("{key} is deprecated in favour of {replacement}")
            },
            Check::Retiring { key, .. } => format!("{key} is deprecated and will be removed"),
            Check::StructuredMap { key } => {
                format!("{key} must parse as a string map, otherwise the feature is disabled")
            },
            Check::Required { key } => format!("{key} must be set"),
            Check::ProviderSelector { key } => format!(
                "{key} must be one of {}",
                quoted_list(SmsProvider::SUPPORTED)
            ),
            Check::ProviderRequired {
                selector,
                provider,
                key,
            } => format!(
                "{key} must be set when {selector}={}",
                provider.selector().unwrap_or_default()
            ),
            Check::FlagRequired { flag, key, .. } => {
                format!("{key} must be set when {flag} is enabled")
            },
            Check::FlagAnyOf { flag, keys, .. } => format!(
                "one of {} must be set when {flag} is enabled",
                quoted_list(keys)
            ),
        }
    }
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    const SELECTOR: &str = "SMS_PROVIDER";
    const FLAG: &str = "FEATURE_ENABLED";
    const ANY_OF: &[&str] = &["ORIGINS", "CLIENT_URL"];

    #[test]
    fn superseded_fires_when_set() {
        let rule = Rule::superseded("T1", "OLD", "NEW");
        let snapshot = ConfigurationSnapshot::new().with_value("OLD", "x");

        let diagnostic = rule.evaluate(&snapshot).unwrap();

        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.message,
            "The 'OLD' environment variable is deprecated. Use 'NEW' instead"
        );
    }

    #[test]
    fn superseded_silent_when_empty() {
        let rule = Rule::superseded("T1", "OLD", "NEW");
        let snapshot = ConfigurationSnapshot::new().with_value("OLD", "");
        assert!(rule.evaluate(&snapshot).is_none());
    }

    #[test]
    fn retiring_appends_advice() {
        let rule = Rule::retiring("T2", "FETCH_URL", "Use files.");
        let snapshot = ConfigurationSnapshot::new().with_value("FETCH_URL", "http://x");

        let diagnostic = rule.evaluate(&snapshot).unwrap();

        assert!(diagnostic.message.ends_with("deactivated soon. Use files."));
    }

    #[test]
    fn structured_map_fires_only_on_invalid() {
        let rule = Rule::structured_map("T3", "CLAIMS");
        let invalid = ConfigurationSnapshot::new()
            .with_value("CLAIMS", "{oops")
            .with_structured("CLAIMS", StructuredValue::Invalid("eof".into()));
        let parsed = ConfigurationSnapshot::new()
            .with_value("CLAIMS", "{}")
            .with_structured("CLAIMS", StructuredValue::Parsed(BTreeMap::new()));

        let diagnostic = rule.evaluate(&invalid).unwrap();
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.message,
            "Impossible to parse 'CLAIMS'. It will therefore be deactivated"
        );
        assert!(rule.evaluate(&parsed).is_none());
    }

    #[test]
    fn structured_map_ignores_unset_key() {
        let rule = Rule::structured_map("T3", "CLAIMS");
        let snapshot = ConfigurationSnapshot::new()
            .with_structured("CLAIMS", StructuredValue::Invalid("stale".into()));
        assert!(rule.evaluate(&snapshot).is_none());
    }

    #[test]
    fn required_names_the_key() {
        let rule = Rule::required("T4", "DB_URL");
        let diagnostic = rule.evaluate(&ConfigurationSnapshot::new()).unwrap();

        assert!(diagnostic.is_fatal());
        assert_eq!(
            diagnostic.message,
            "No value was provided for required env var DB_URL"
        );
    }

    #[test]
    fn selector_reports_unset_as_empty_value() {
        let rule = Rule::provider_selector("T5", SELECTOR);
        let diagnostic = rule.evaluate(&ConfigurationSnapshot::new()).unwrap();

        assert_eq!(
            diagnostic.message,
            "Incorrect SMS provider - SMS_PROVIDER of value '' is not one of the supported. Supported providers are: 'twilio', 'alicloud'"
        );
    }

    #[test]
    fn selector_reports_unsupported_value() {
        let rule = Rule::provider_selector("T5", SELECTOR);
        let snapshot = ConfigurationSnapshot::new().with_value(SELECTOR, "sns");

        let diagnostic = rule.evaluate(&snapshot).unwrap();

        assert!(diagnostic.message.contains("of value 'sns'"));
    }

    #[test]
    fn selector_accepts_supported_values() {
        let rule = Rule::provider_selector("T5", SELECTOR);
        for value in SmsProvider::SUPPORTED {
            let snapshot = ConfigurationSnapshot::new().with_value(SELECTOR, *value);
            assert!(rule.evaluate(&snapshot).is_none());
        }
    }

    #[test]
    fn provider_required_only_for_matching_provider() {
        let rule = Rule::provider_required("T6", SELECTOR, SmsProvider::Alicloud, "ALI_KEY");
        let twilio = ConfigurationSnapshot::new().with_value(SELECTOR, "twilio");
        let alicloud = ConfigurationSnapshot::new().with_value(SELECTOR, "alicloud");

        assert!(rule.evaluate(&twilio).is_none());
        let diagnostic = rule.evaluate(&alicloud).unwrap();
        assert_eq!(
            diagnostic.message,
            "Env var ALI_KEY is required when the Alicloud is set as SMS provider, but no value was provided"
        );
    }

    #[test]
    fn provider_required_skipped_for_unset_selector() {
        let rule = Rule::provider_required("T6", SELECTOR, SmsProvider::Twilio, "SID");
        assert!(rule.evaluate(&ConfigurationSnapshot::new()).is_none());
    }

    #[test]
    fn flag_required_only_when_enabled() {
        let rule = Rule::flag_required("T7", FLAG, "Webauthn", "RP_NAME");
        let disabled = ConfigurationSnapshot::new().with_value(FLAG, "false");
        let enabled = ConfigurationSnapshot::new().with_value(FLAG, "true");

        assert!(rule.evaluate(&disabled).is_none());
        assert_eq!(
            rule.evaluate(&enabled).unwrap().message,
            "Env var RP_NAME is required when the Webauthn is enabled, but no value was provided"
        );
    }

    #[test]
    fn flag_any_of_satisfied_by_either_key() {
        let rule = Rule::flag_any_of("T8", FLAG, "Webauthn", ANY_OF);
        let base = ConfigurationSnapshot::new().with_value(FLAG, "true");

        assert!(rule.evaluate(&base.clone().with_value("ORIGINS", "https://a")).is_none());
        assert!(rule.evaluate(&base.clone().with_value("CLIENT_URL", "https://b")).is_none());

        let diagnostic = rule.evaluate(&base.with_value("ORIGINS", "")).unwrap();
        assert_eq!(
            diagnostic.message,
            "Webauthn requires at least on of the following to be set: 'ORIGINS', 'CLIENT_URL'"
        );
    }

    #[test]
    fn reads_lists_every_key() {
        let rule = Rule::flag_any_of("T8", FLAG, "Webauthn", ANY_OF);
        assert_eq!(rule.reads(), vec![FLAG, "ORIGINS", "CLIENT_URL"]);

        let rule = Rule::provider_required("T6", SELECTOR, SmsProvider::Twilio, "SID");
        assert_eq!(rule.reads(), vec![SELECTOR, "SID"]);
    }

    #[test]
    fn describe_mentions_key() {
        let rule = Rule::provider_required("T6", SELECTOR, SmsProvider::Twilio, "SID");
        assert_eq!(rule.describe(), "SID must be set when SMS_PROVIDER=twilio");
    }
}

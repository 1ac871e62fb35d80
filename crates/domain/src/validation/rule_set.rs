//! The startup rule set
//!
//! Rules run in the order listed here; message order in logs follows it.

use crate::keys::{
    AUTH_CLIENT_URL, AUTH_EMAIL_TEMPLATE_FETCH_URL, AUTH_JWT_CUSTOM_CLAIMS,
    AUTH_SMS_ALICLOUD_ACCESS_KEY_ID, AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET,
    AUTH_SMS_ALICLOUD_ENDPOINT, AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT,
    AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT, AUTH_SMS_PROVIDER, AUTH_SMS_TWILIO_ACCOUNT_SID,
    AUTH_SMS_TWILIO_AUTH_TOKEN, AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID,
    AUTH_USER_SESSION_VARIABLE_FIELDS, AUTH_WEBAUTHN_ENABLED, AUTH_WEBAUTHN_RP_NAME,
    HASURA_GRAPHQL_ADMIN_SECRET, HASURA_GRAPHQL_DATABASE_URL, HASURA_GRAPHQL_GRAPHQL_URL,
    HASURA_GRAPHQL_JWT_SECRET, WEBAUTHN_ORIGIN_SOURCES,
};
use crate::value_objects::SmsProvider;

use super::Rule;

const WEBAUTHN: &str = "Webauthn";

const TEMPLATE_ADVICE: &str = "Please include your templates in the file system instead.";

/// Every rule checked at startup
pub static RULE_SET: &[Rule] = &[
    Rule::superseded(
        "CFG001",
        AUTH_USER_SESSION_VARIABLE_FIELDS,
        AUTH_JWT_CUSTOM_CLAIMS,
    ),
    Rule::structured_map("CFG002", AUTH_JWT_CUSTOM_CLAIMS),
    Rule::required("CFG003", HASURA_GRAPHQL_JWT_SECRET),
    Rule::required("CFG004", HASURA_GRAPHQL_GRAPHQL_URL),
    Rule::required("CFG005", HASURA_GRAPHQL_ADMIN_SECRET),
    Rule::required("CFG006", HASURA_GRAPHQL_DATABASE_URL),
    Rule::retiring("CFG007", AUTH_EMAIL_TEMPLATE_FETCH_URL, TEMPLATE_ADVICE),
    Rule::provider_selector("CFG008", AUTH_SMS_PROVIDER),
    Rule::provider_required(
        "CFG009",
        AUTH_SMS_PROVIDER,
        SmsProvider::Twilio,
        AUTH_SMS_TWILIO_ACCOUNT_SID,
    ),
    Rule::provider_required(
        "CFG010",
        AUTH_SMS_PROVIDER,
        SmsProvider::Twilio,
        AUTH_SMS_TWILIO_AUTH_TOKEN,
    ),
    Rule::provider_required(
        "CFG011",
        AUTH_SMS_PROVIDER,
        SmsProvider::Twilio,
        AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID,
    ),
    Rule::provider_required(
        "CFG012",
        AUTH_SMS_PROVIDER,
        SmsProvider::Alicloud,
        AUTH_SMS_ALICLOUD_ACCESS_KEY_ID,
    ),
    Rule::provider_required(
        "CFG013",
        AUTH_SMS_PROVIDER,
        SmsProvider::Alicloud,
        AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET,
    ),
    Rule::provider_required(
        "CFG014",
        AUTH_SMS_PROVIDER,
        SmsProvider::Alicloud,
        AUTH_SMS_ALICLOUD_ENDPOINT,
    ),
    Rule::provider_required(
        "CFG015",
        AUTH_SMS_PROVIDER,
        SmsProvider::Alicloud,
        AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT,
    ),
    Rule::provider_required(
        "CFG016",
        AUTH_SMS_PROVIDER,
        SmsProvider::Alicloud,
        AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT,
    ),
    Rule::flag_required("CFG017", AUTH_WEBAUTHN_ENABLED, WEBAUTHN, AUTH_CLIENT_URL),
    Rule::flag_required(
        "CFG018",
        AUTH_WEBAUTHN_ENABLED,
        WEBAUTHN,
        AUTH_WEBAUTHN_RP_NAME,
    ),
    Rule::flag_any_of(
        "CFG019",
        AUTH_WEBAUTHN_ENABLED,
        WEBAUTHN,
        WEBAUTHN_ORIGIN_SOURCES,
    ),
];

/// Look up a rule by its code
#[must_use]
pub fn find_rule(code: &str) -> Option<&'static Rule> {
    RULE_SET.iter().find(|rule| rule.code == code)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::keys::{ALICLOUD_REQUIRED, ALWAYS_REQUIRED, RECOGNIZED_KEYS, TWILIO_REQUIRED};
    use crate::validation::{Check, Severity};

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = RULE_SET.iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), RULE_SET.len());
    }

    #[test]
    fn rules_only_read_recognized_keys() {
        for rule in RULE_SET {
            for key in rule.reads() {
                assert!(RECOGNIZED_KEYS.contains(&key), "{} reads {key}", rule.code);
            }
        }
    }

    #[test]
    fn every_always_required_key_has_a_rule() {
        for key in ALWAYS_REQUIRED {
            assert!(
                RULE_SET
                    .iter()
                    .any(|r| r.check == Check::Required { key: *key })
            );
        }
    }

    fn provider_keys(provider: &SmsProvider) -> Vec<&'static str> {
        RULE_SET
            .iter()
            .filter_map(|r| match &r.check {
                Check::ProviderRequired {
                    provider: p, key, ..
                } if p == provider => Some(*key),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_provider_key_has_a_rule() {
        assert_eq!(provider_keys(&SmsProvider::Twilio), TWILIO_REQUIRED);
        assert_eq!(provider_keys(&SmsProvider::Alicloud), ALICLOUD_REQUIRED);
    }

    #[test]
    fn provider_rules_only_name_supported_providers() {
        for rule in RULE_SET {
            if let Check::ProviderRequired { provider, .. } = &rule.check {
                assert!(provider.selector().is_some(), "{}", rule.code);
            }
        }
    }

    #[test]
    fn deprecations_are_warnings() {
        for rule in RULE_SET {
            let advisory = matches!(
                rule.check,
                Check::Superseded { .. } | Check::Retiring { .. } | Check::StructuredMap { .. }
            );
            assert_eq!(advisory, rule.severity == Severity::Warning, "{}", rule.code);
        }
    }

    #[test]
    fn find_rule_by_code() {
        assert_eq!(
            find_rule("CFG008").map(|r| &r.check),
            Some(&Check::ProviderSelector {
                key: AUTH_SMS_PROVIDER
            })
        );
        assert!(find_rule("CFG999").is_none());
    }
}

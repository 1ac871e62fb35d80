//! Configuration keys recognised by the startup checks
//!
//! Every key the rule set reads is declared here once. The snapshot
//! capture reads exactly [`RECOGNIZED_KEYS`] from the resolver.

/// Legacy session claim fields, superseded by [`AUTH_JWT_CUSTOM_CLAIMS`]
pub const AUTH_USER_SESSION_VARIABLE_FIELDS: &str = "AUTH_USER_SESSION_VARIABLE_FIELDS";
/// JSON object mapping claim names to user field paths
pub const AUTH_JWT_CUSTOM_CLAIMS: &str = "AUTH_JWT_CUSTOM_CLAIMS";
/// Remote email template location (retiring)
pub const AUTH_EMAIL_TEMPLATE_FETCH_URL: &str = "AUTH_EMAIL_TEMPLATE_FETCH_URL";

pub const HASURA_GRAPHQL_JWT_SECRET: &str = "HASURA_GRAPHQL_JWT_SECRET";
pub const HASURA_GRAPHQL_GRAPHQL_URL: &str = "HASURA_GRAPHQL_GRAPHQL_URL";
pub const HASURA_GRAPHQL_ADMIN_SECRET: &str = "HASURA_GRAPHQL_ADMIN_SECRET";
pub const HASURA_GRAPHQL_DATABASE_URL: &str = "HASURA_GRAPHQL_DATABASE_URL";

/// SMS provider selector
pub const AUTH_SMS_PROVIDER: &str = "AUTH_SMS_PROVIDER";

pub const AUTH_SMS_TWILIO_ACCOUNT_SID: &str = "AUTH_SMS_TWILIO_ACCOUNT_SID";
pub const AUTH_SMS_TWILIO_AUTH_TOKEN: &str = "AUTH_SMS_TWILIO_AUTH_TOKEN";
pub const AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID: &str = "AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID";

pub const AUTH_SMS_ALICLOUD_ACCESS_KEY_ID: &str = "AUTH_SMS_ALICLOUD_ACCESS_KEY_ID";
pub const AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET: &str = "AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET";
pub const AUTH_SMS_ALICLOUD_ENDPOINT: &str = "AUTH_SMS_ALICLOUD_ENDPOINT";
pub const AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT: &str = "AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT";
pub const AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT: &str = "AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT";

/// WebAuthn feature flag
pub const AUTH_WEBAUTHN_ENABLED: &str = "AUTH_WEBAUTHN_ENABLED";
pub const AUTH_CLIENT_URL: &str = "AUTH_CLIENT_URL";
pub const AUTH_WEBAUTHN_RP_NAME: &str = "AUTH_WEBAUTHN_RP_NAME";
pub const AUTH_WEBAUTHN_RP_ORIGINS: &str = "AUTH_WEBAUTHN_RP_ORIGINS";

/// Keys that must always hold a value
pub const ALWAYS_REQUIRED: &[&str] = &[
    HASURA_GRAPHQL_JWT_SECRET,
    HASURA_GRAPHQL_GRAPHQL_URL,
    HASURA_GRAPHQL_ADMIN_SECRET,
    HASURA_GRAPHQL_DATABASE_URL,
];

pub const TWILIO_REQUIRED: &[&str] = &[
    AUTH_SMS_TWILIO_ACCOUNT_SID,
    AUTH_SMS_TWILIO_AUTH_TOKEN,
    AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID,
];

pub const ALICLOUD_REQUIRED: &[&str] = &[
    AUTH_SMS_ALICLOUD_ACCESS_KEY_ID,
    AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET,
    AUTH_SMS_ALICLOUD_ENDPOINT,
    AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT,
    AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT,
];

/// Keys accepted as a WebAuthn origin source; at least one must be set
pub const WEBAUTHN_ORIGIN_SOURCES: &[&str] = &[AUTH_WEBAUTHN_RP_ORIGINS, AUTH_CLIENT_URL];

/// Keys whose value is a serialized map and needs secondary parsing
pub const STRUCTURED_KEYS: &[&str] = &[AUTH_JWT_CUSTOM_CLAIMS];

/// Every key read by the rule set
pub const RECOGNIZED_KEYS: &[&str] = &[
    AUTH_USER_SESSION_VARIABLE_FIELDS,
    AUTH_JWT_CUSTOM_CLAIMS,
    HASURA_GRAPHQL_JWT_SECRET,
    HASURA_GRAPHQL_GRAPHQL_URL,
    HASURA_GRAPHQL_ADMIN_SECRET,
    HASURA_GRAPHQL_DATABASE_URL,
    AUTH_EMAIL_TEMPLATE_FETCH_URL,
    AUTH_SMS_PROVIDER,
    AUTH_SMS_TWILIO_ACCOUNT_SID,
    AUTH_SMS_TWILIO_AUTH_TOKEN,
    AUTH_SMS_TWILIO_MESSAGING_SERVICE_ID,
    AUTH_SMS_ALICLOUD_ACCESS_KEY_ID,
    AUTH_SMS_ALICLOUD_ACCESS_KEY_SECRET,
    AUTH_SMS_ALICLOUD_ENDPOINT,
    AUTH_SMS_ALICLOUD_TEMPLATE_CODE_DEFAULT,
    AUTH_SMS_ALICLOUD_SIGN_NAME_DEFAULT,
    AUTH_WEBAUTHN_ENABLED,
    AUTH_CLIENT_URL,
    AUTH_WEBAUTHN_RP_NAME,
    AUTH_WEBAUTHN_RP_ORIGINS,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn recognized_keys_are_unique() {
        let unique: HashSet<_> = RECOGNIZED_KEYS.iter().collect();
        assert_eq!(unique.len(), RECOGNIZED_KEYS.len());
    }

    #[test]
    fn grouped_keys_are_recognized() {
        let groups = [
            ALWAYS_REQUIRED,
            TWILIO_REQUIRED,
            ALICLOUD_REQUIRED,
            WEBAUTHN_ORIGIN_SOURCES,
            STRUCTURED_KEYS,
        ];
        for key in groups.iter().flat_map(|g| g.iter()) {
            assert!(RECOGNIZED_KEYS.contains(key), "{key} missing from RECOGNIZED_KEYS");
        }
    }

    #[test]
    fn provider_key_lists_are_disjoint() {
        assert!(TWILIO_REQUIRED.iter().all(|k| !ALICLOUD_REQUIRED.contains(k)));
    }
}

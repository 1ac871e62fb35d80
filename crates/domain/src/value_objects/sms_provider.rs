//! SMS provider selection

use std::fmt;

use serde::Serialize;

/// SMS provider chosen by the selector key
///
/// Any selector value that is not recognised, including an unset one,
/// maps to [`SmsProvider::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio Messaging
    Twilio,
    /// Alibaba Cloud SMS
    Alicloud,
    /// Missing or unsupported selector; holds the raw value if one was set
    Unrecognized(Option<String>),
}

impl SmsProvider {
    /// Selector values accepted, in the order they are reported
    pub const SUPPORTED: &'static [&'static str] = &["twilio", "alicloud"];

    /// Resolve a raw selector value
    ///
    /// Matching is exact; an empty value is treated like an absent one.
    #[must_use]
    pub fn from_selector(raw: Option<&str>) -> Self {
        match raw {
            Some("twilio") => Self::Twilio,
            Some("alicloud") => Self::Alicloud,
            Some("") | None => Self::Unrecognized(None),
            Some(other) => Self::Unrecognized(Some(other.to_string())),
        }
    }

    /// Human-facing provider name used in messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Twilio => "Twilio",
            Self::Alicloud => "Alicloud",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// Selector value that chooses this provider
    #[must_use]
    pub const fn selector(&self) -> Option<&'static str> {
        match self {
            Self::Twilio => Some("twilio"),
            Self::Alicloud => Some("alicloud"),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for SmsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(Some(raw)) => write!(f, "unrecognized ({raw})"),
            other => write!(f, "{}", other.display_name()),
        }
    }
}

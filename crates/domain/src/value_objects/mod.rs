//! Value Objects - Immutable, identity-less domain primitives

mod sms_provider;

pub use sms_provider::SmsProvider;

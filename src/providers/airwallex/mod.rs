mod client;

pub use client::AirwallexGateway;

pub const AIRWALLEX_USER_AGENT: &str = concat!("farebridge/", env!("CARGO_PKG_VERSION"));

/// Provider endpoint paths, resolved against the configured `api_base`.
pub(crate) const LOGIN_PATH: &str = "/api/v1/authentication/login";
pub(crate) const PAYMENT_INTENTS_CREATE_PATH: &str = "/api/v1/pa/payment_intents/create";

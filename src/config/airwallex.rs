use serde::{Deserialize, Serialize};
use url::Url;

/// Payment-provider configuration.
///
/// Credentials may be left empty; the bridge validates them per request and
/// rejects payment operations with a configuration error before any outbound
/// call is attempted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AirwallexConfig {
    /// Provider client identifier.
    /// TOML: `airwallex.client_id`. Env: `AIRWALLEX_CLIENT_ID`.
    #[serde(default)]
    pub client_id: String,

    /// Provider API key.
    /// TOML: `airwallex.api_key`. Env: `AIRWALLEX_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Provider API base URL.
    /// TOML: `airwallex.api_base`. Env: `AIRWALLEX_API_BASE`.
    /// Point at `https://api-demo.airwallex.com` for the demo environment.
    #[serde(default = "default_api_base")]
    pub api_base: Url,
}

impl AirwallexConfig {
    /// True when both credentials are present and non-blank.
    pub fn has_credentials(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Whether `api_base` points at the provider's demo environment.
    pub fn is_demo(&self) -> bool {
        self.api_base
            .host_str()
            .is_some_and(|host| host.contains("demo"))
    }
}

impl Default for AirwallexConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            api_key: String::new(),
            api_base: default_api_base(),
        }
    }
}

fn default_api_base() -> Url {
    Url::parse("https://api.airwallex.com").expect("default api base is a valid URL")
}

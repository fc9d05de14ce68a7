mod airwallex;
mod basic;

pub use airwallex::AirwallexConfig;
pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Payment-provider settings (see `airwallex` table in config.toml).
    #[serde(default)]
    pub airwallex: AirwallexConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment variables overlaid onto the `airwallex` table.
const AIRWALLEX_ENV_KEYS: [&str; 3] = [
    "AIRWALLEX_CLIENT_ID",
    "AIRWALLEX_API_KEY",
    "AIRWALLEX_API_BASE",
];

impl Config {
    /// Builds a Figment merging defaults, an optional config TOML file, and
    /// `AIRWALLEX_*` environment variables (highest precedence).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(
            Env::raw()
                .only(&AIRWALLEX_ENV_KEYS)
                .map(|key| {
                    key.as_str()
                        .to_ascii_lowercase()
                        .replacen('_', ".", 1)
                        .into()
                })
                .split("."),
        )
    }

    /// Loads configuration from all layers.
    ///
    /// Provider credentials are allowed to be absent here: the server boots
    /// and serves, and every payment operation re-validates them, failing
    /// with a configuration error before any outbound call is made.
    pub fn load() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + config.toml + env): {err}")
        })
    }
}

mod basic;
mod services;

pub use basic::BasicConfig;
pub use services::{AuthServiceConfig, WeatherServiceConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// External auth service settings (see `auth` table in config.toml).
    #[serde(default)]
    pub auth: AuthServiceConfig,

    /// Weather provider settings (see `weather` table in config.toml).
    #[serde(default)]
    pub weather: WeatherServiceConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "LIFEHUB_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file,
    /// and `LIFEHUB_*` environment variables (double underscore separates
    /// table from key, e.g. `LIFEHUB_BASIC__LISTEN_PORT`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from all sources. An empty `auth.service_key` is
    /// allowed; the service tier simply rejects everything until one is set.
    pub fn from_optional_sources() -> Self {
        Self::figment()
            .extract()
            .unwrap_or_else(|err| panic!("failed to extract configuration: {err}"))
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_sources);

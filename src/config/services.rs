use serde::{Deserialize, Serialize};
use url::Url;

/// External auth service configuration. LifeHub does not manage identities
/// itself; every bearer token is resolved against this service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthServiceConfig {
    /// Auth service root, e.g. `https://xyz.example.co`.
    /// TOML: `auth.base_url`.
    #[serde(default = "default_auth_base_url")]
    pub base_url: Url,

    /// Anonymous-tier key sent as `apikey` alongside user-token lookups.
    /// TOML: `auth.anon_key`.
    #[serde(default)]
    pub anon_key: String,

    /// Service-role key guarding catalog administration (required,
    /// non-empty). TOML: `auth.service_key`.
    #[serde(default)]
    pub service_key: String,

    /// Seconds a resolved token stays in the in-process cache.
    /// TOML: `auth.cache_ttl_secs`. Default: 60.
    #[serde(default = "default_auth_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_auth_base_url(),
            anon_key: String::new(),
            // No insecure default. `Config::load()` enforces non-empty.
            service_key: String::new(),
            cache_ttl_secs: default_auth_cache_ttl(),
        }
    }
}

fn default_auth_base_url() -> Url {
    Url::parse("http://127.0.0.1:9999").expect("static default url must parse")
}

fn default_auth_cache_ttl() -> u64 {
    60
}

/// Weather provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherServiceConfig {
    /// Provider root. TOML: `weather.base_url`.
    /// Default: `https://api.open-meteo.com`.
    #[serde(default = "default_weather_base_url")]
    pub base_url: Url,

    /// Seconds a fetched report stays in the in-process cache.
    /// TOML: `weather.cache_ttl_secs`. Default: 600.
    #[serde(default = "default_weather_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for WeatherServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            cache_ttl_secs: default_weather_cache_ttl(),
        }
    }
}

fn default_weather_base_url() -> Url {
    Url::parse("https://api.open-meteo.com").expect("static default url must parse")
}

fn default_weather_cache_ttl() -> u64 {
    600
}

use crate::config::WeatherServiceConfig;
use crate::error::HubError;
use ahash::AHasher;
use lifehub_schema::WeatherReport;
use moka::sync::Cache;
use serde::Deserialize;
use std::hash::Hasher;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Cache cell size: two decimal places of latitude/longitude (~1 km).
const COORD_PRECISION: f64 = 100.0;

fn cache_key(lat: f64, lon: f64) -> u64 {
    let mut hasher = AHasher::default();
    hasher.write_i64((lat * COORD_PRECISION).round() as i64);
    hasher.write_i64((lon * COORD_PRECISION).round() as i64);
    hasher.finish()
}

#[derive(Debug, Deserialize)]
struct ProviderPayload {
    latitude: f64,
    longitude: f64,
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i64,
    time: String,
}

/// Client for the weather provider, caching reports per coordinate cell.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    cfg: Arc<WeatherServiceConfig>,
    cache: Cache<u64, Arc<WeatherReport>>,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, cfg: WeatherServiceConfig) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(cfg.cache_ttl_secs.max(1)))
            .max_capacity(4_096)
            .build();
        Self {
            http,
            cfg: Arc::new(cfg),
            cache,
        }
    }

    /// Current conditions at the given coordinates.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<Arc<WeatherReport>, HubError> {
        let key = cache_key(lat, lon);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let mut url = self.cfg.base_url.join("v1/forecast")?;
        url.query_pairs_mut()
            .append_pair("latitude", &format!("{lat:.4}"))
            .append_pair("longitude", &format!("{lon:.4}"))
            .append_pair("current_weather", "true");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HubError::UpstreamStatus(status));
        }

        let text = resp.text().await?;
        let payload: ProviderPayload = serde_json::from_str(&text)?;
        let report = Arc::new(WeatherReport {
            latitude: payload.latitude,
            longitude: payload.longitude,
            temperature_c: payload.current_weather.temperature,
            wind_speed_kmh: payload.current_weather.windspeed,
            weather_code: payload.current_weather.weathercode,
            observed_at: payload.current_weather.time,
        });
        debug!(lat, lon, "fetched weather report");
        self.cache.insert(key, report.clone());
        Ok(report)
    }
}

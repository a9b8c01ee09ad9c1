use serde::{Deserialize, Serialize};

/// Current conditions as returned by GET /api/weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    /// WMO weather interpretation code.
    pub weather_code: i64,
    pub observed_at: String,
}

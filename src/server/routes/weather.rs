use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use lifehub_schema::WeatherReport;
use serde::Deserialize;

pub fn router() -> Router<HubState> {
    Router::new().route("/weather", get(current_weather))
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    lat: f64,
    lon: f64,
}

async fn current_weather(
    State(state): State<HubState>,
    _user: AuthUser,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, HubError> {
    let Query(query) = query.map_err(|rej| HubError::invalid("query", rej.body_text()))?;
    if !query.lat.is_finite() || !(-90.0..=90.0).contains(&query.lat) {
        return Err(HubError::invalid("lat", "must be between -90 and 90"));
    }
    if !query.lon.is_finite() || !(-180.0..=180.0).contains(&query.lon) {
        return Err(HubError::invalid("lon", "must be between -180 and 180"));
    }

    let report = state.weather.current(query.lat, query.lon).await?;
    Ok(Json((*report).clone()))
}

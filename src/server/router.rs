use crate::api::{AuthClient, WeatherClient};
use crate::config::Config;
use crate::db::DbHandle;
use crate::server::routes;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use reqwest::header::HeaderValue;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

const HUB_USER_AGENT: &str = concat!("lifehub/", env!("CARGO_PKG_VERSION"));

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct HubState {
    pub db: DbHandle,
    pub auth: AuthClient,
    pub weather: WeatherClient,
    pub service_key: Arc<str>,
}

impl HubState {
    pub fn new(db: DbHandle, cfg: &Config) -> Self {
        fn build_client(user_agent: &str) -> reqwest::Client {
            reqwest::Client::builder()
                .user_agent(user_agent)
                .redirect(reqwest::redirect::Policy::none())
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("failed to build reqwest client")
        }

        let auth = AuthClient::new(build_client(HUB_USER_AGENT), cfg.auth.clone());
        let weather = WeatherClient::new(build_client(HUB_USER_AGENT), cfg.weather.clone());
        let service_key: Arc<str> = Arc::from(cfg.auth.service_key.as_str());

        Self {
            db,
            auth,
            weather,
            service_key,
        }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    let path = uri.path();
    let protocol = format_http_version(version);

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

pub fn hub_router(state: HubState) -> Router {
    let api = Router::new()
        .merge(routes::tasks::router())
        .merge(routes::mood::router())
        .merge(routes::finance::router())
        .merge(routes::folders::router())
        .merge(routes::notes::router())
        .merge(routes::calendar::router())
        .merge(routes::widgets::router())
        .merge(routes::profile::router())
        .merge(routes::weather::router());

    Router::new()
        .nest("/api", api)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
        // Browser clients call the API directly.
        .layer(CorsLayer::permissive())
}

//! Shared test harness: a temp-file SQLite database, a stub auth service on
//! an ephemeral port, and the full router under test.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use lifehub::config::Config;
use lifehub::server::router::{HubState, hub_router};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::net::TcpListener;

/// Service-role key configured for every test app.
pub const SERVICE_KEY: &str = "svc-secret";

/// Tokens the stub auth service accepts, mapped to user ids.
const SESSIONS: [(&str, &str); 2] = [("token-alice", "user-alice"), ("token-bob", "user-bob")];

pub const ALICE: &str = "token-alice";
pub const BOB: &str = "token-bob";

async fn stub_user(headers: HeaderMap) -> Response {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match token.and_then(|t| SESSIONS.iter().find(|(key, _)| *key == t)) {
        Some((_, user)) => Json(json!({
            "id": user,
            "email": format!("{user}@example.com"),
        }))
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid token" })),
        )
            .into_response(),
    }
}

/// Serve the stub auth service on an ephemeral port and return its base URL.
pub async fn spawn_stub_auth() -> String {
    let app = Router::new().route("/auth/v1/user", get(stub_user));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub auth listener");
    let addr = listener.local_addr().expect("stub auth addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub auth serve");
    });
    format!("http://{addr}")
}

pub struct TestApp {
    pub app: Router,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.db_path.clone().into_os_string();
            side.push(suffix);
            let _ = std::fs::remove_file(side);
        }
    }
}

/// Full router over a fresh database and a live stub auth service.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(tweak: impl FnOnce(&mut Config)) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "lifehub-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let db = lifehub::db::spawn(&database_url).await;

    let auth_url = spawn_stub_auth().await;
    let mut cfg = Config::default();
    cfg.auth.base_url = auth_url.parse().expect("stub auth url");
    cfg.auth.service_key = SERVICE_KEY.to_string();
    tweak(&mut cfg);

    let state = HubState::new(db, &cfg);
    TestApp {
        app: hub_router(state),
        db_path,
    }
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not json")
}

mod common;

use axum::http::StatusCode;
use common::{ALICE, get_request, read_json, spawn_app, spawn_app_with};
use tower::ServiceExt;

#[tokio::test]
async fn requests_without_a_token_are_rejected() {
    let harness = spawn_app().await;

    for uri in [
        "/api/tasks",
        "/api/mood",
        "/api/finance",
        "/api/folders",
        "/api/notes",
        "/api/calendars",
        "/api/calendar/events?from=2026-01-01T00:00:00Z&to=2026-01-02T00:00:00Z",
        "/api/profile",
        "/api/widgets",
        "/api/widget-types",
        "/api/weather?lat=52.5&lon=13.4",
    ] {
        let resp = harness
            .app
            .clone()
            .oneshot(get_request(uri, None))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "uri: {uri}");
    }
}

#[tokio::test]
async fn unknown_tokens_are_rejected_with_a_generic_401() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(get_request("/api/tasks", Some("token-mallory")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn unreachable_auth_service_yields_503() {
    // Point the auth client at a closed port.
    let harness = spawn_app_with(|cfg| {
        cfg.auth.base_url = "http://127.0.0.1:9".parse().expect("static url");
    })
    .await;

    let resp = harness
        .app
        .clone()
        .oneshot(get_request("/api/tasks", Some(ALICE)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "AUTH_UNAVAILABLE");
}

#[tokio::test]
async fn unknown_paths_fall_through_to_404() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(get_request("/api/nope", Some(ALICE)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

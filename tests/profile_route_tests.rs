mod common;

use axum::http::StatusCode;
use common::{ALICE, BOB, get_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn reads_never_create_and_return_an_empty_default() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(get_request("/api/profile", Some(ALICE)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let profile = read_json(resp).await;
    assert!(profile["display_name"].is_null());
    assert_eq!(profile["preferences"], json!({}));
    assert!(profile["created_at"].is_null());
}

#[tokio::test]
async fn partial_puts_merge_with_the_stored_row() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            ALICE,
            &json!({
                "display_name": "Alice",
                "timezone": "Europe/Berlin",
                "preferences": { "theme": "dark" }
            }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let profile = read_json(resp).await;
    assert_eq!(profile["display_name"], "Alice");
    assert!(profile["created_at"].is_string());

    // A later patch touching one field keeps the rest.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            ALICE,
            &json!({ "social_links": { "site": "https://alice.example" } }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let profile = read_json(resp).await;
    assert_eq!(profile["display_name"], "Alice");
    assert_eq!(profile["preferences"], json!({ "theme": "dark" }));
    assert_eq!(
        profile["social_links"],
        json!({ "site": "https://alice.example" })
    );

    // Profiles are per-user.
    let resp = app
        .clone()
        .oneshot(get_request("/api/profile", Some(BOB)))
        .await
        .expect("request failed");
    let other = read_json(resp).await;
    assert!(other["display_name"].is_null());
}

#[tokio::test]
async fn timezone_must_be_a_known_iana_name() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/profile",
            ALICE,
            &json!({ "timezone": "Middle/Earth" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["details"]["field"], "timezone");
}

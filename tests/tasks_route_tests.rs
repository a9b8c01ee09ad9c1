mod common;

use axum::http::StatusCode;
use common::{ALICE, BOB, get_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn task_crud_flow() {
    let harness = spawn_app().await;
    let app = &harness.app;

    // Empty title -> 400 VALIDATION.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            ALICE,
            &json!({ "title": "   " }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
    assert_eq!(body["error"]["details"]["field"], "title");

    // Unknown priority -> 400.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            ALICE,
            &json!({ "title": "Water plants", "priority": "urgent" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Valid create -> 201 with the defaulted priority.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            ALICE,
            &json!({ "title": "Water plants", "due_date": "2026-08-10" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["title"], "Water plants");
    assert_eq!(created["priority"], "medium");
    assert_eq!(created["completed"], false);
    let id = created["id"].as_i64().expect("task id");

    // Listed for its owner.
    let resp = app
        .clone()
        .oneshot(get_request("/api/tasks", Some(ALICE)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    // Invisible to another user.
    let resp = app
        .clone()
        .oneshot(get_request("/api/tasks", Some(BOB)))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));

    // Partial update flips completion and keeps the title.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            ALICE,
            &json!({ "completed": true }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Water plants");

    // Another user cannot touch it.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            BOB,
            &json!({ "completed": false }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Delete, then the second delete 404s.
    let resp = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            ALICE,
            &json!({}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            ALICE,
            &json!({}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_bodies_are_rejected() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/tasks")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {ALICE}"))
                .body(axum::body::Body::from("not-json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION");
}

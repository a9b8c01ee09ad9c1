mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use common::{ALICE, BOB, get_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn entry_type_and_amount_are_validated() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/finance",
            ALICE,
            &json!({ "entry_type": "donation", "amount": 10.0, "entry_date": "2026-08-01" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["details"]["field"], "entry_type");

    for amount in [0.0, -5.0] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/finance",
                ALICE,
                &json!({ "entry_type": "expense", "amount": amount, "entry_date": "2026-08-01" }),
            ))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "amount: {amount}");
    }
}

#[tokio::test]
async fn finance_crud_and_isolation() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/finance",
            ALICE,
            &json!({
                "entry_type": "expense",
                "amount": 42.50,
                "category": "groceries",
                "entry_date": "2026-08-01"
            }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let id = created["id"].as_i64().expect("entry id");
    assert_eq!(created["category"], "groceries");

    // Other users see nothing.
    let resp = app
        .clone()
        .oneshot(get_request("/api/finance", Some(BOB)))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/finance/{id}"),
            ALICE,
            &json!({ "amount": 40.0, "entry_type": "transfer" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["entry_type"], "transfer");
    assert_eq!(updated["amount"], 40.0);

    let resp = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/finance/{id}"),
            ALICE,
            &json!({}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn trailing_days_window_filters_old_entries() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let today = Utc::now().date_naive();
    let recent = today - Days::new(3);
    let ancient = today - Days::new(90);

    for (date, amount) in [(recent, 12.0), (ancient, 99.0)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/finance",
                ALICE,
                &json!({
                    "entry_type": "income",
                    "amount": amount,
                    "entry_date": date.to_string()
                }),
            ))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .clone()
        .oneshot(get_request("/api/finance?days=30&tz=UTC", Some(ALICE)))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    let entries = list.as_array().expect("finance list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["amount"], 12.0);
}

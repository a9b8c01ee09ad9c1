mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use common::{ALICE, get_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn posting_twice_for_a_date_updates_in_place() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/mood",
            ALICE,
            &json!({ "entry_date": "2026-08-01", "mood_score": 4, "note": "meh" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first = read_json(resp).await;
    let first_id = first["id"].as_i64().expect("entry id");

    // Same date again: the entry is updated, not duplicated.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/mood",
            ALICE,
            &json!({ "entry_date": "2026-08-01", "mood_score": 8 }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second = read_json(resp).await;
    assert_eq!(second["id"].as_i64(), Some(first_id));
    assert_eq!(second["mood_score"], 8);
    // A missing note keeps the stored one.
    assert_eq!(second["note"], "meh");

    let resp = app
        .clone()
        .oneshot(get_request("/api/mood", Some(ALICE)))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn mood_score_must_stay_in_range() {
    let harness = spawn_app().await;

    for score in [0, 11, -3] {
        let resp = harness
            .app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/mood",
                ALICE,
                &json!({ "entry_date": "2026-08-01", "mood_score": score }),
            ))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "score: {score}");
        let body = read_json(resp).await;
        assert_eq!(body["error"]["details"]["field"], "mood_score");
    }
}

#[tokio::test]
async fn trailing_days_window_filters_old_entries() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let today = Utc::now().date_naive();
    let recent = today - Days::new(2);
    let ancient = today - Days::new(40);

    for (date, score) in [(recent, 6), (ancient, 2)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/mood",
                ALICE,
                &json!({ "entry_date": date.to_string(), "mood_score": score }),
            ))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .clone()
        .oneshot(get_request("/api/mood?days=7&tz=UTC", Some(ALICE)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    let entries = list.as_array().expect("mood list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mood_score"], 6);

    // Unknown timezone -> 400.
    let resp = app
        .clone()
        .oneshot(get_request(
            "/api/mood?days=7&tz=Mars%2FOlympus_Mons",
            Some(ALICE),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["details"]["field"], "tz");
}

#[tokio::test]
async fn update_and_delete_by_id() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/mood",
            ALICE,
            &json!({ "entry_date": "2026-08-02", "mood_score": 5 }),
        ))
        .await
        .expect("request failed");
    let created = read_json(resp).await;
    let id = created["id"].as_i64().expect("entry id");

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/mood/{id}"),
            ALICE,
            &json!({ "mood_score": 9 }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["mood_score"], 9);

    let resp = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/mood/{id}"),
            ALICE,
            &json!({}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/mood/{id}"),
            ALICE,
            &json!({ "mood_score": 3 }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

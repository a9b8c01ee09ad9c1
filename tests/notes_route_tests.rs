mod common;

use axum::http::StatusCode;
use common::{ALICE, get_request, json_request, read_json, spawn_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn folder_names_are_unique_per_user() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/folders",
            ALICE,
            &json!({ "name": "Recipes" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/folders",
            ALICE,
            &json!({ "name": "Recipes" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn note_create_resolves_or_creates_the_named_folder() {
    let harness = spawn_app().await;
    let app = &harness.app;

    // Unknown folder name: the folder is created first, then the note.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notes",
            ALICE,
            &json!({ "title": "Sourdough", "content": "feed starter", "folder_name": "Recipes" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let note = read_json(resp).await;
    let folder_id = note["folder_id"].as_i64().expect("folder id");

    let resp = app
        .clone()
        .oneshot(get_request("/api/folders", Some(ALICE)))
        .await
        .expect("request failed");
    let folders = read_json(resp).await;
    assert_eq!(folders.as_array().map(Vec::len), Some(1));
    assert_eq!(folders[0]["name"], "Recipes");

    // Same name again reuses the folder.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notes",
            ALICE,
            &json!({ "title": "Focaccia", "folder_name": "Recipes" }),
        ))
        .await
        .expect("request failed");
    let second = read_json(resp).await;
    assert_eq!(second["folder_id"].as_i64(), Some(folder_id));

    // Folder filter returns both notes.
    let resp = app
        .clone()
        .oneshot(get_request(
            &format!("/api/notes?folder_id={folder_id}"),
            Some(ALICE),
        ))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn explicit_null_detaches_a_note_from_its_folder() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notes",
            ALICE,
            &json!({ "title": "Packing list", "folder_name": "Travel" }),
        ))
        .await
        .expect("request failed");
    let note = read_json(resp).await;
    let id = note["id"].as_i64().expect("note id");
    assert!(note["folder_id"].is_i64());

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/notes/{id}"),
            ALICE,
            &json!({ "folder_id": null }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert!(updated["folder_id"].is_null());
    assert_eq!(updated["title"], "Packing list");
}

#[tokio::test]
async fn deleting_a_folder_detaches_its_notes() {
    let harness = spawn_app().await;
    let app = &harness.app;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notes",
            ALICE,
            &json!({ "title": "Itinerary", "folder_name": "Travel" }),
        ))
        .await
        .expect("request failed");
    let note = read_json(resp).await;
    let note_id = note["id"].as_i64().expect("note id");
    let folder_id = note["folder_id"].as_i64().expect("folder id");

    let resp = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/folders/{folder_id}"),
            ALICE,
            &json!({}),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The note survives, unfiled.
    let resp = app
        .clone()
        .oneshot(get_request("/api/notes", Some(ALICE)))
        .await
        .expect("request failed");
    let list = read_json(resp).await;
    let survivors = list.as_array().expect("note list");
    let survivor = survivors
        .iter()
        .find(|n| n["id"].as_i64() == Some(note_id))
        .expect("note should survive folder deletion");
    assert!(survivor["folder_id"].is_null());
}

#[tokio::test]
async fn attaching_to_a_foreign_folder_is_a_404() {
    let harness = spawn_app().await;

    let resp = harness
        .app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/notes",
            ALICE,
            &json!({ "title": "Sneaky", "folder_id": 9999 }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

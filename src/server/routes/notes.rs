use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use crate::server::routes::require_body;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use lifehub_schema::notes::{FolderCreate, Note, NoteCreate, NotePatch};
use serde::Deserialize;

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
}

#[derive(Debug, Deserialize)]
struct NotesQuery {
    folder_id: Option<i64>,
}

async fn list_notes(
    State(state): State<HubState>,
    user: AuthUser,
    Query(query): Query<NotesQuery>,
) -> Result<Json<Vec<Note>>, HubError> {
    let rows = state.db.list_notes(&user.id, query.folder_id).await?;
    Ok(Json(rows.into_iter().map(Note::from).collect()))
}

/// Create a note, resolving `folder_name` to a folder id when no explicit
/// `folder_id` was given. An unknown name creates the folder first; the two
/// writes are sequential with no rollback.
async fn create_note(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<NoteCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    if body.title.trim().is_empty() {
        return Err(HubError::invalid("title", "must not be empty"));
    }

    let folder_id = match (body.folder_id, body.folder_name.as_deref()) {
        (Some(id), _) => Some(id),
        (None, Some(name)) if !name.trim().is_empty() => {
            let name = name.trim();
            match state.db.find_folder_by_name(&user.id, name).await? {
                Some(folder) => Some(folder.id),
                None => {
                    let folder = state
                        .db
                        .create_folder(
                            &user.id,
                            FolderCreate {
                                name: name.to_string(),
                                is_default: None,
                                sort_order: None,
                            },
                        )
                        .await?;
                    Some(folder.id)
                }
            }
        }
        _ => None,
    };

    let row = state
        .db
        .create_note(
            &user.id,
            folder_id,
            body.title.trim(),
            body.content.as_deref().unwrap_or(""),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(Note::from(row))))
}

async fn update_note(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<NotePatch>, JsonRejection>,
) -> Result<Json<Note>, HubError> {
    let body = require_body(payload)?;
    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return Err(HubError::invalid("title", "must not be empty"));
        }
    }

    let row = state.db.update_note(&user.id, id, body).await?;
    Ok(Json(Note::from(row)))
}

async fn delete_note(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_note(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

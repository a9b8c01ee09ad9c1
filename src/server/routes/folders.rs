use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use crate::server::routes::require_body;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use lifehub_schema::notes::{Folder, FolderCreate, FolderPatch};

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/folders", get(list_folders).post(create_folder))
        .route("/folders/{id}", put(update_folder).delete(delete_folder))
}

async fn list_folders(
    State(state): State<HubState>,
    user: AuthUser,
) -> Result<Json<Vec<Folder>>, HubError> {
    let rows = state.db.list_folders(&user.id).await?;
    Ok(Json(rows.into_iter().map(Folder::from).collect()))
}

async fn create_folder(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<FolderCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let mut body = require_body(payload)?;
    body.name = body.name.trim().to_string();
    if body.name.is_empty() {
        return Err(HubError::invalid("name", "must not be empty"));
    }

    let row = state.db.create_folder(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(Folder::from(row))))
}

async fn update_folder(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<FolderPatch>, JsonRejection>,
) -> Result<Json<Folder>, HubError> {
    let body = require_body(payload)?;
    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return Err(HubError::invalid("name", "must not be empty"));
        }
    }

    let row = state.db.update_folder(&user.id, id, body).await?;
    Ok(Json(Folder::from(row)))
}

async fn delete_folder(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_folder(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

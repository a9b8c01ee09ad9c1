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
use lifehub_schema::tasks::{Task, TaskCreate, TaskPatch};

const PRIORITIES: [&str; 3] = ["low", "medium", "high"];

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
}

async fn list_tasks(
    State(state): State<HubState>,
    user: AuthUser,
) -> Result<Json<Vec<Task>>, HubError> {
    let rows = state.db.list_tasks(&user.id).await?;
    Ok(Json(rows.into_iter().map(Task::from).collect()))
}

async fn create_task(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<TaskCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    if body.title.trim().is_empty() {
        return Err(HubError::invalid("title", "must not be empty"));
    }
    validate_priority(body.priority.as_deref())?;

    let row = state.db.create_task(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(Task::from(row))))
}

async fn update_task(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, HubError> {
    let body = require_body(payload)?;
    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return Err(HubError::invalid("title", "must not be empty"));
        }
    }
    validate_priority(body.priority.as_deref())?;

    let row = state.db.update_task(&user.id, id, body).await?;
    Ok(Json(Task::from(row)))
}

async fn delete_task(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_task(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_priority(priority: Option<&str>) -> Result<(), HubError> {
    match priority {
        Some(p) if !PRIORITIES.contains(&p) => Err(HubError::invalid(
            "priority",
            format!("must be one of: {}", PRIORITIES.join(", ")),
        )),
        _ => Ok(()),
    }
}

use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::guards::auth::RequireServiceKey;
use crate::server::router::HubState;
use crate::server::routes::require_body;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use lifehub_schema::widgets::{Widget, WidgetCreate, WidgetPatch, WidgetType, WidgetTypeCreate};

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/widget-types", get(list_widget_types).post(create_widget_type))
        .route("/widgets", get(list_widgets).post(create_widget))
        .route("/widgets/{id}", put(update_widget).delete(delete_widget))
}

async fn list_widget_types(
    State(state): State<HubState>,
    _user: AuthUser,
) -> Result<Json<Vec<WidgetType>>, HubError> {
    let rows = state.db.list_widget_types().await?;
    Ok(Json(rows.into_iter().map(WidgetType::from).collect()))
}

/// Catalog administration; service-role tier only.
async fn create_widget_type(
    State(state): State<HubState>,
    _svc: RequireServiceKey,
    payload: Result<Json<WidgetTypeCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    if body.slug.trim().is_empty() {
        return Err(HubError::invalid("slug", "must not be empty"));
    }
    if body.name.trim().is_empty() {
        return Err(HubError::invalid("name", "must not be empty"));
    }

    let row = state.db.create_widget_type(body).await?;
    Ok((StatusCode::CREATED, Json(WidgetType::from(row))))
}

async fn list_widgets(
    State(state): State<HubState>,
    user: AuthUser,
) -> Result<Json<Vec<Widget>>, HubError> {
    let rows = state.db.list_widgets(&user.id).await?;
    Ok(Json(rows.into_iter().map(Widget::from).collect()))
}

async fn create_widget(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<WidgetCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    validate_dimensions(body.width, body.height)?;

    let row = state.db.create_widget(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(Widget::from(row))))
}

async fn update_widget(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<WidgetPatch>, JsonRejection>,
) -> Result<Json<Widget>, HubError> {
    let body = require_body(payload)?;
    validate_dimensions(body.width, body.height)?;

    let row = state.db.update_widget(&user.id, id, body).await?;
    Ok(Json(Widget::from(row)))
}

async fn delete_widget(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_widget(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_dimensions(width: Option<i64>, height: Option<i64>) -> Result<(), HubError> {
    if let Some(width) = width {
        if width < 1 {
            return Err(HubError::invalid("width", "must be at least 1"));
        }
    }
    if let Some(height) = height {
        if height < 1 {
            return Err(HubError::invalid("height", "must be at least 1"));
        }
    }
    Ok(())
}

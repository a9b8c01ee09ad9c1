use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use crate::server::routes::{analytics_range, require_body};
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use lifehub_schema::mood::{MoodEntry, MoodPatch, MoodUpsert};
use serde::Deserialize;

const MIN_SCORE: i64 = 1;
const MAX_SCORE: i64 = 10;

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/mood", get(list_mood).post(upsert_mood))
        .route("/mood/{id}", put(update_mood).delete(delete_mood))
}

#[derive(Debug, Deserialize)]
struct MoodQuery {
    days: Option<u32>,
    tz: Option<String>,
}

async fn list_mood(
    State(state): State<HubState>,
    user: AuthUser,
    Query(query): Query<MoodQuery>,
) -> Result<Json<Vec<MoodEntry>>, HubError> {
    let range = analytics_range(query.days, query.tz.as_deref())?;
    let rows = state.db.list_mood(&user.id, range).await?;
    Ok(Json(rows.into_iter().map(MoodEntry::from).collect()))
}

/// Posting for a date that already has an entry updates it in place; a day
/// never has two entries.
async fn upsert_mood(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<MoodUpsert>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    validate_score(body.mood_score)?;

    let row = state.db.upsert_mood(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(MoodEntry::from(row))))
}

async fn update_mood(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<MoodPatch>, JsonRejection>,
) -> Result<Json<MoodEntry>, HubError> {
    let body = require_body(payload)?;
    if let Some(score) = body.mood_score {
        validate_score(score)?;
    }

    let row = state.db.update_mood(&user.id, id, body).await?;
    Ok(Json(MoodEntry::from(row)))
}

async fn delete_mood(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_mood(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_score(score: i64) -> Result<(), HubError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(HubError::invalid(
            "mood_score",
            format!("must be between {MIN_SCORE} and {MAX_SCORE}"),
        ));
    }
    Ok(())
}

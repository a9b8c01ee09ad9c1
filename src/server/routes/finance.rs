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
use lifehub_schema::finance::{FinanceCreate, FinanceEntry, FinancePatch};
use serde::Deserialize;

const ENTRY_TYPES: [&str; 3] = ["income", "expense", "transfer"];

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/finance", get(list_finance).post(create_finance))
        .route("/finance/{id}", put(update_finance).delete(delete_finance))
}

#[derive(Debug, Deserialize)]
struct FinanceQuery {
    days: Option<u32>,
    tz: Option<String>,
}

async fn list_finance(
    State(state): State<HubState>,
    user: AuthUser,
    Query(query): Query<FinanceQuery>,
) -> Result<Json<Vec<FinanceEntry>>, HubError> {
    let range = analytics_range(query.days, query.tz.as_deref())?;
    let rows = state.db.list_finance(&user.id, range).await?;
    Ok(Json(rows.into_iter().map(FinanceEntry::from).collect()))
}

async fn create_finance(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<FinanceCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    validate_entry_type(&body.entry_type)?;
    validate_amount(body.amount)?;

    let row = state.db.create_finance(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(FinanceEntry::from(row))))
}

async fn update_finance(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<FinancePatch>, JsonRejection>,
) -> Result<Json<FinanceEntry>, HubError> {
    let body = require_body(payload)?;
    if let Some(entry_type) = &body.entry_type {
        validate_entry_type(entry_type)?;
    }
    if let Some(amount) = body.amount {
        validate_amount(amount)?;
    }

    let row = state.db.update_finance(&user.id, id, body).await?;
    Ok(Json(FinanceEntry::from(row)))
}

async fn delete_finance(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_finance(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_entry_type(entry_type: &str) -> Result<(), HubError> {
    if !ENTRY_TYPES.contains(&entry_type) {
        return Err(HubError::invalid(
            "entry_type",
            format!("must be one of: {}", ENTRY_TYPES.join(", ")),
        ));
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<(), HubError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(HubError::invalid("amount", "must be a positive number"));
    }
    Ok(())
}

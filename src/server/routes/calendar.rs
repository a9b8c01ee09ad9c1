use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use crate::server::routes::require_body;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use lifehub_calendar_core::{EventSpan, ViewKind, local_midnight_utc, pack_range, view_range};
use lifehub_schema::calendar::{
    Calendar, CalendarCreate, CalendarEvent, CalendarLayout, DayCell, EventCreate, EventPatch,
    TimedPlacement,
};
use serde::Deserialize;

pub fn router() -> Router<HubState> {
    Router::new()
        .route("/calendars", get(list_calendars).post(create_calendar))
        .route("/calendar/events", get(list_events).post(create_event))
        .route(
            "/calendar/events/{id}",
            put(update_event).delete(delete_event),
        )
        .route("/calendar/layout", get(layout))
}

async fn list_calendars(
    State(state): State<HubState>,
    user: AuthUser,
) -> Result<Json<Vec<Calendar>>, HubError> {
    let rows = state.db.list_calendars(&user.id).await?;
    Ok(Json(rows.into_iter().map(Calendar::from).collect()))
}

async fn create_calendar(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<CalendarCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    if body.name.trim().is_empty() {
        return Err(HubError::invalid("name", "must not be empty"));
    }

    let row = state.db.create_calendar(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(Calendar::from(row))))
}

#[derive(Debug, Deserialize)]
struct EventsQuery {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

async fn list_events(
    State(state): State<HubState>,
    user: AuthUser,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Result<Json<Vec<CalendarEvent>>, HubError> {
    let Query(query) = query.map_err(|rej| HubError::invalid("query", rej.body_text()))?;
    if query.from >= query.to {
        return Err(HubError::invalid("from", "must be before `to`"));
    }

    let rows = state.db.list_events(&user.id, query.from, query.to).await?;
    Ok(Json(rows.into_iter().map(CalendarEvent::from).collect()))
}

async fn create_event(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<EventCreate>, JsonRejection>,
) -> Result<impl IntoResponse, HubError> {
    let body = require_body(payload)?;
    if body.title.trim().is_empty() {
        return Err(HubError::invalid("title", "must not be empty"));
    }
    if body.ends_at < body.starts_at {
        return Err(HubError::invalid("ends_at", "must not precede starts_at"));
    }

    let row = state.db.create_event(&user.id, body).await?;
    Ok((StatusCode::CREATED, Json(CalendarEvent::from(row))))
}

async fn update_event(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
    payload: Result<Json<EventPatch>, JsonRejection>,
) -> Result<Json<CalendarEvent>, HubError> {
    let body = require_body(payload)?;
    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return Err(HubError::invalid("title", "must not be empty"));
        }
    }
    if let (Some(starts_at), Some(ends_at)) = (body.starts_at, body.ends_at) {
        if ends_at < starts_at {
            return Err(HubError::invalid("ends_at", "must not precede starts_at"));
        }
    }

    let row = state.db.update_event(&user.id, id, body).await?;
    Ok(Json(CalendarEvent::from(row)))
}

async fn delete_event(
    State(state): State<HubState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, HubError> {
    state.db.delete_event(&user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct LayoutQuery {
    view: Option<String>,
    date: Option<NaiveDate>,
    tz: Option<String>,
}

/// Server-side layout for a calendar view: per-day occurrence membership,
/// all-day lanes, pixel geometry, and overlap columns.
async fn layout(
    State(state): State<HubState>,
    user: AuthUser,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<CalendarLayout>, HubError> {
    let view_name = query.view.as_deref().unwrap_or("month");
    let view: ViewKind = view_name
        .parse()
        .map_err(|()| HubError::invalid("view", "must be one of: month, week, day, agenda"))?;

    let tz = resolve_timezone(&state, &user, query.tz.as_deref()).await?;
    let focus = query
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&tz).date_naive());
    let (start, days) = view_range(view, focus);

    let from = local_midnight_utc(start, tz);
    let to = local_midnight_utc(start + Days::new(u64::from(days)), tz);
    let events = state.db.list_events(&user.id, from, to).await?;
    let spans: Vec<EventSpan> = events.iter().map(|e| e.to_span()).collect();

    let cells = pack_range(&spans, start, days, tz)
        .into_iter()
        .map(|plan| DayCell {
            date: plan.date,
            all_day: plan.all_day,
            timed: plan
                .timed
                .into_iter()
                .map(|p| TimedPlacement {
                    event_id: p.id,
                    top_px: p.top_px,
                    height_px: p.height_px,
                    column: p.column,
                    columns: p.columns,
                })
                .collect(),
            hidden: plan.hidden,
        })
        .collect();

    Ok(Json(CalendarLayout {
        view: view_name.to_string(),
        timezone: tz.name().to_string(),
        start,
        days: cells,
    }))
}

/// Explicit `tz` parameter, else the profile timezone, else UTC. A stored
/// timezone that no longer parses falls back to UTC instead of failing the
/// whole view.
async fn resolve_timezone(
    state: &HubState,
    user: &AuthUser,
    tz: Option<&str>,
) -> Result<Tz, HubError> {
    if let Some(name) = tz {
        return name
            .parse()
            .map_err(|_| HubError::invalid("tz", format!("unknown timezone `{name}`")));
    }
    let profile_tz = state
        .db
        .get_profile(&user.id)
        .await?
        .and_then(|p| p.timezone);
    Ok(profile_tz
        .and_then(|name| name.parse().ok())
        .unwrap_or(chrono_tz::UTC))
}

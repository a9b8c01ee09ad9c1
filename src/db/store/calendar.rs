use crate::db::models::{DbCalendar, DbCalendarEvent};
use crate::error::HubError;
use chrono::{DateTime, Utc};
use lifehub_schema::calendar::{CalendarCreate, EventCreate, EventPatch};
use sqlx::SqlitePool;

const CAL_COLUMNS: &str = "id, user_id, name, color, is_default, created_at, updated_at";
const EVENT_COLUMNS: &str = "id, user_id, calendar_id, title, description, location, \
     starts_at, ends_at, is_all_day, color, created_at, updated_at";

pub(crate) async fn list_calendars(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<DbCalendar>, HubError> {
    let rows = sqlx::query_as::<_, DbCalendar>(&format!(
        "SELECT {CAL_COLUMNS} FROM calendars WHERE user_id = ? ORDER BY is_default DESC, id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The first calendar a user creates becomes default; explicitly requesting
/// default clears the previous flag. Sequential statements, best-effort.
pub(crate) async fn create_calendar(
    pool: &SqlitePool,
    user_id: &str,
    create: &CalendarCreate,
) -> Result<DbCalendar, HubError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM calendars WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    let is_default = create.is_default.unwrap_or(false) || existing == 0;
    if is_default && existing > 0 {
        sqlx::query("UPDATE calendars SET is_default = 0 WHERE user_id = ?")
            .bind(user_id)
            .execute(pool)
            .await?;
    }

    let now = Utc::now();
    let row = sqlx::query_as::<_, DbCalendar>(&format!(
        r#"
    INSERT INTO calendars (user_id, name, color, is_default, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING {CAL_COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(&create.name)
    .bind(&create.color)
    .bind(is_default)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Events intersecting the half-open window `[from, to)`.
pub(crate) async fn list_events(
    pool: &SqlitePool,
    user_id: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbCalendarEvent>, HubError> {
    let rows = sqlx::query_as::<_, DbCalendarEvent>(&format!(
        r#"
    SELECT {EVENT_COLUMNS} FROM calendar_events
    WHERE user_id = ? AND starts_at < ? AND ends_at > ?
    ORDER BY starts_at, id
    "#
    ))
    .bind(user_id)
    .bind(to)
    .bind(from)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(crate) async fn create_event(
    pool: &SqlitePool,
    user_id: &str,
    create: &EventCreate,
) -> Result<DbCalendarEvent, HubError> {
    let calendar_id = match create.calendar_id {
        Some(id) => {
            verify_calendar(pool, user_id, id).await?;
            id
        }
        None => default_calendar_id(pool, user_id).await?.ok_or_else(|| {
            HubError::invalid("calendar_id", "no default calendar; create a calendar first")
        })?,
    };

    let now = Utc::now();
    let row = sqlx::query_as::<_, DbCalendarEvent>(&format!(
        r#"
    INSERT INTO calendar_events (
        user_id, calendar_id, title, description, location,
        starts_at, ends_at, is_all_day, color, created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING {EVENT_COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(calendar_id)
    .bind(&create.title)
    .bind(&create.description)
    .bind(&create.location)
    .bind(create.starts_at)
    .bind(create.ends_at)
    .bind(create.is_all_day.unwrap_or(false))
    .bind(&create.color)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub(crate) async fn update_event(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    patch: &EventPatch,
) -> Result<DbCalendarEvent, HubError> {
    if let Some(calendar_id) = patch.calendar_id {
        verify_calendar(pool, user_id, calendar_id).await?;
    }
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbCalendarEvent>(&format!(
        r#"
    UPDATE calendar_events SET
        calendar_id = COALESCE(?, calendar_id),
        title = COALESCE(?, title),
        description = COALESCE(?, description),
        location = COALESCE(?, location),
        starts_at = COALESCE(?, starts_at),
        ends_at = COALESCE(?, ends_at),
        is_all_day = COALESCE(?, is_all_day),
        color = COALESCE(?, color),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {EVENT_COLUMNS}
    "#
    ))
    .bind(patch.calendar_id)
    .bind(&patch.title)
    .bind(&patch.description)
    .bind(&patch.location)
    .bind(patch.starts_at)
    .bind(patch.ends_at)
    .bind(patch.is_all_day)
    .bind(&patch.color)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete_event(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM calendar_events WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

async fn default_calendar_id(pool: &SqlitePool, user_id: &str) -> Result<Option<i64>, HubError> {
    let id: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM calendars WHERE user_id = ? AND is_default = 1 LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(id)
}

async fn verify_calendar(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let exists: Option<i64> =
        sqlx::query_scalar("SELECT id FROM calendars WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if exists.is_none() {
        return Err(HubError::NotFound);
    }
    Ok(())
}

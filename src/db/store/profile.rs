use crate::db::models::DbProfile;
use crate::error::HubError;
use chrono::Utc;
use lifehub_schema::profile::ProfilePatch;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use sqlx::types::Json;

const COLUMNS: &str = "user_id, display_name, timezone, preferences, social_links, \
     notification_settings, created_at, updated_at";

pub(crate) async fn get(pool: &SqlitePool, user_id: &str) -> Result<Option<DbProfile>, HubError> {
    let row = sqlx::query_as::<_, DbProfile>(&format!(
        "SELECT {COLUMNS} FROM profiles WHERE user_id = ?"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Read-merge-write upsert: only fields present in the patch overwrite the
/// stored row. A read never creates the row; only PUT does.
pub(crate) async fn upsert(
    pool: &SqlitePool,
    user_id: &str,
    patch: &ProfilePatch,
) -> Result<DbProfile, HubError> {
    let existing = get(pool, user_id).await?;
    let now = Utc::now();

    let empty = || Value::Object(Map::new());
    let (display_name, timezone, preferences, social_links, notifications, created_at) =
        match existing {
            Some(row) => (
                patch.display_name.clone().or(row.display_name),
                patch.timezone.clone().or(row.timezone),
                patch.preferences.clone().unwrap_or(row.preferences.0),
                patch.social_links.clone().unwrap_or(row.social_links.0),
                patch
                    .notification_settings
                    .clone()
                    .unwrap_or(row.notification_settings.0),
                row.created_at,
            ),
            None => (
                patch.display_name.clone(),
                patch.timezone.clone(),
                patch.preferences.clone().unwrap_or_else(empty),
                patch.social_links.clone().unwrap_or_else(empty),
                patch.notification_settings.clone().unwrap_or_else(empty),
                now,
            ),
        };

    let row = sqlx::query_as::<_, DbProfile>(&format!(
        r#"
    INSERT INTO profiles (
        user_id, display_name, timezone, preferences, social_links,
        notification_settings, created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(user_id) DO UPDATE SET
        display_name = excluded.display_name,
        timezone = excluded.timezone,
        preferences = excluded.preferences,
        social_links = excluded.social_links,
        notification_settings = excluded.notification_settings,
        updated_at = excluded.updated_at
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(display_name)
    .bind(timezone)
    .bind(Json(preferences))
    .bind(Json(social_links))
    .bind(Json(notifications))
    .bind(created_at)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

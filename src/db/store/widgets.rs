use crate::db::models::{DbUserWidget, DbWidgetType};
use crate::error::HubError;
use chrono::Utc;
use lifehub_schema::widgets::{WidgetCreate, WidgetPatch, WidgetTypeCreate};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use sqlx::types::Json;

/// Hard cap on dashboard widgets per user.
pub(crate) const WIDGET_LIMIT: i64 = 20;

const TYPE_COLUMNS: &str = "id, slug, name, description, default_config, created_at";
const WIDGET_COLUMNS: &str =
    "id, user_id, widget_type_id, position, width, height, config, created_at, updated_at";

pub(crate) async fn list_types(pool: &SqlitePool) -> Result<Vec<DbWidgetType>, HubError> {
    let rows = sqlx::query_as::<_, DbWidgetType>(&format!(
        "SELECT {TYPE_COLUMNS} FROM widget_types ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(crate) async fn create_type(
    pool: &SqlitePool,
    create: &WidgetTypeCreate,
) -> Result<DbWidgetType, HubError> {
    let now = Utc::now();
    let default_config = create
        .default_config
        .clone()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let row = sqlx::query_as::<_, DbWidgetType>(&format!(
        r#"
    INSERT INTO widget_types (slug, name, description, default_config, created_at)
    VALUES (?, ?, ?, ?, ?)
    RETURNING {TYPE_COLUMNS}
    "#
    ))
    .bind(&create.slug)
    .bind(&create.name)
    .bind(&create.description)
    .bind(Json(default_config))
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            HubError::Conflict(format!("Widget type `{}` already exists.", create.slug))
        } else {
            HubError::Database(err)
        }
    })?;
    Ok(row)
}

pub(crate) async fn list(pool: &SqlitePool, user_id: &str) -> Result<Vec<DbUserWidget>, HubError> {
    let rows = sqlx::query_as::<_, DbUserWidget>(&format!(
        "SELECT {WIDGET_COLUMNS} FROM user_widgets WHERE user_id = ? ORDER BY position, id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    user_id: &str,
    create: &WidgetCreate,
) -> Result<DbUserWidget, HubError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_widgets WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    if count >= WIDGET_LIMIT {
        return Err(HubError::WidgetLimit);
    }

    let widget_type = sqlx::query_as::<_, DbWidgetType>(&format!(
        "SELECT {TYPE_COLUMNS} FROM widget_types WHERE id = ?"
    ))
    .bind(create.widget_type_id)
    .fetch_optional(pool)
    .await?
    .ok_or(HubError::NotFound)?;

    // A fresh instance inherits the catalog's default config.
    let config = create
        .config
        .clone()
        .unwrap_or_else(|| widget_type.default_config.0.clone());

    let now = Utc::now();
    let row = sqlx::query_as::<_, DbUserWidget>(&format!(
        r#"
    INSERT INTO user_widgets (user_id, widget_type_id, position, width, height, config, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING {WIDGET_COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(create.widget_type_id)
    .bind(create.position.unwrap_or(count))
    .bind(create.width.unwrap_or(1))
    .bind(create.height.unwrap_or(1))
    .bind(Json(config))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            HubError::Conflict("A widget of this type already exists.".to_string())
        } else {
            HubError::Database(err)
        }
    })?;
    Ok(row)
}

pub(crate) async fn update(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    patch: &WidgetPatch,
) -> Result<DbUserWidget, HubError> {
    let now = Utc::now();
    let config = patch.config.clone().map(Json);
    let row = sqlx::query_as::<_, DbUserWidget>(&format!(
        r#"
    UPDATE user_widgets SET
        position = COALESCE(?, position),
        width = COALESCE(?, width),
        height = COALESCE(?, height),
        config = COALESCE(?, config),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {WIDGET_COLUMNS}
    "#
    ))
    .bind(patch.position)
    .bind(patch.width)
    .bind(patch.height)
    .bind(config)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM user_widgets WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

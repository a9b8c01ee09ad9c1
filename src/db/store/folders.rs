use crate::db::models::DbFolder;
use crate::error::HubError;
use chrono::Utc;
use lifehub_schema::notes::{FolderCreate, FolderPatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, name, is_default, sort_order, created_at, updated_at";

pub(crate) async fn list(pool: &SqlitePool, user_id: &str) -> Result<Vec<DbFolder>, HubError> {
    let rows = sqlx::query_as::<_, DbFolder>(&format!(
        "SELECT {COLUMNS} FROM folders WHERE user_id = ? ORDER BY sort_order, name"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(crate) async fn find_by_name(
    pool: &SqlitePool,
    user_id: &str,
    name: &str,
) -> Result<Option<DbFolder>, HubError> {
    let row = sqlx::query_as::<_, DbFolder>(&format!(
        "SELECT {COLUMNS} FROM folders WHERE user_id = ? AND name = ?"
    ))
    .bind(user_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    user_id: &str,
    create: &FolderCreate,
) -> Result<DbFolder, HubError> {
    let now = Utc::now();
    let is_default = create.is_default.unwrap_or(false);
    if is_default {
        sqlx::query("UPDATE folders SET is_default = 0 WHERE user_id = ?")
            .bind(user_id)
            .execute(pool)
            .await?;
    }
    let row = sqlx::query_as::<_, DbFolder>(&format!(
        r#"
    INSERT INTO folders (user_id, name, is_default, sort_order, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(&create.name)
    .bind(is_default)
    .bind(create.sort_order.unwrap_or(0))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            HubError::Conflict(format!("Folder `{}` already exists.", create.name))
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
    patch: &FolderPatch,
) -> Result<DbFolder, HubError> {
    let now = Utc::now();
    if patch.is_default == Some(true) {
        sqlx::query("UPDATE folders SET is_default = 0 WHERE user_id = ?")
            .bind(user_id)
            .execute(pool)
            .await?;
    }
    let row = sqlx::query_as::<_, DbFolder>(&format!(
        r#"
    UPDATE folders SET
        name = COALESCE(?, name),
        is_default = COALESCE(?, is_default),
        sort_order = COALESCE(?, sort_order),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {COLUMNS}
    "#
    ))
    .bind(&patch.name)
    .bind(patch.is_default)
    .bind(patch.sort_order)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            HubError::Conflict("A folder with that name already exists.".to_string())
        } else {
            HubError::Database(err)
        }
    })?;
    row.ok_or(HubError::NotFound)
}

/// Deleting a folder detaches its notes (FK `ON DELETE SET NULL`).
pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM folders WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

use crate::db::models::DbTask;
use crate::error::HubError;
use chrono::Utc;
use lifehub_schema::tasks::{TaskCreate, TaskPatch};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, user_id, title, description, due_date, priority, completed, created_at, updated_at";

pub(crate) async fn list(pool: &SqlitePool, user_id: &str) -> Result<Vec<DbTask>, HubError> {
    let rows = sqlx::query_as::<_, DbTask>(&format!(
        "SELECT {COLUMNS} FROM tasks WHERE user_id = ? ORDER BY completed, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    user_id: &str,
    create: &TaskCreate,
) -> Result<DbTask, HubError> {
    let now = Utc::now();
    let priority = create.priority.as_deref().unwrap_or("medium");
    let row = sqlx::query_as::<_, DbTask>(&format!(
        r#"
    INSERT INTO tasks (user_id, title, description, due_date, priority, completed, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, 0, ?, ?)
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(&create.title)
    .bind(&create.description)
    .bind(create.due_date)
    .bind(priority)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub(crate) async fn update(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    patch: &TaskPatch,
) -> Result<DbTask, HubError> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbTask>(&format!(
        r#"
    UPDATE tasks SET
        title = COALESCE(?, title),
        description = COALESCE(?, description),
        due_date = COALESCE(?, due_date),
        priority = COALESCE(?, priority),
        completed = COALESCE(?, completed),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {COLUMNS}
    "#
    ))
    .bind(&patch.title)
    .bind(&patch.description)
    .bind(patch.due_date)
    .bind(&patch.priority)
    .bind(patch.completed)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

use crate::db::models::DbNote;
use crate::error::HubError;
use chrono::Utc;
use lifehub_schema::notes::NotePatch;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, folder_id, title, content, created_at, updated_at";

pub(crate) async fn list(
    pool: &SqlitePool,
    user_id: &str,
    folder_id: Option<i64>,
) -> Result<Vec<DbNote>, HubError> {
    let rows = match folder_id {
        Some(folder) => {
            sqlx::query_as::<_, DbNote>(&format!(
                r#"
            SELECT {COLUMNS} FROM notes
            WHERE user_id = ? AND folder_id = ?
            ORDER BY updated_at DESC, id DESC
            "#
            ))
            .bind(user_id)
            .bind(folder)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbNote>(&format!(
                "SELECT {COLUMNS} FROM notes WHERE user_id = ? ORDER BY updated_at DESC, id DESC"
            ))
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    user_id: &str,
    folder_id: Option<i64>,
    title: &str,
    content: &str,
) -> Result<DbNote, HubError> {
    if let Some(folder) = folder_id {
        verify_folder(pool, user_id, folder).await?;
    }
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbNote>(&format!(
        r#"
    INSERT INTO notes (user_id, folder_id, title, content, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(folder_id)
    .bind(title)
    .bind(content)
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
    patch: &NotePatch,
) -> Result<DbNote, HubError> {
    let now = Utc::now();
    // Folder moves are a separate statement so an explicit null can detach.
    if let Some(folder_id) = patch.folder_id {
        if let Some(folder) = folder_id {
            verify_folder(pool, user_id, folder).await?;
        }
        sqlx::query("UPDATE notes SET folder_id = ? WHERE id = ? AND user_id = ?")
            .bind(folder_id)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
    }
    let row = sqlx::query_as::<_, DbNote>(&format!(
        r#"
    UPDATE notes SET
        title = COALESCE(?, title),
        content = COALESCE(?, content),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {COLUMNS}
    "#
    ))
    .bind(&patch.title)
    .bind(&patch.content)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

async fn verify_folder(pool: &SqlitePool, user_id: &str, folder_id: i64) -> Result<(), HubError> {
    let exists: Option<i64> =
        sqlx::query_scalar("SELECT id FROM folders WHERE id = ? AND user_id = ?")
            .bind(folder_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if exists.is_none() {
        return Err(HubError::NotFound);
    }
    Ok(())
}

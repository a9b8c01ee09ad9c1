use crate::db::models::DbMoodEntry;
use crate::error::HubError;
use chrono::{NaiveDate, Utc};
use lifehub_schema::mood::{MoodPatch, MoodUpsert};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, entry_date, mood_score, note, created_at, updated_at";

pub(crate) async fn list(
    pool: &SqlitePool,
    user_id: &str,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<DbMoodEntry>, HubError> {
    let rows = match range {
        Some((from, to)) => {
            sqlx::query_as::<_, DbMoodEntry>(&format!(
                r#"
            SELECT {COLUMNS} FROM mood_entries
            WHERE user_id = ? AND entry_date >= ? AND entry_date <= ?
            ORDER BY entry_date DESC
            "#
            ))
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbMoodEntry>(&format!(
                "SELECT {COLUMNS} FROM mood_entries WHERE user_id = ? ORDER BY entry_date DESC"
            ))
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

/// Insert-or-update by `(user_id, entry_date)`: posting twice for the same
/// date updates the existing row.
pub(crate) async fn upsert(
    pool: &SqlitePool,
    user_id: &str,
    upsert: &MoodUpsert,
) -> Result<DbMoodEntry, HubError> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbMoodEntry>(&format!(
        r#"
    INSERT INTO mood_entries (user_id, entry_date, mood_score, note, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
    ON CONFLICT(user_id, entry_date) DO UPDATE SET
        mood_score = excluded.mood_score,
        note = COALESCE(excluded.note, note),
        updated_at = excluded.updated_at
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(upsert.entry_date)
    .bind(upsert.mood_score)
    .bind(&upsert.note)
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
    patch: &MoodPatch,
) -> Result<DbMoodEntry, HubError> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbMoodEntry>(&format!(
        r#"
    UPDATE mood_entries SET
        mood_score = COALESCE(?, mood_score),
        note = COALESCE(?, note),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {COLUMNS}
    "#
    ))
    .bind(patch.mood_score)
    .bind(&patch.note)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM mood_entries WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

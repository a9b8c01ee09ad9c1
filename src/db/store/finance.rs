use crate::db::models::DbFinanceEntry;
use crate::error::HubError;
use chrono::{NaiveDate, Utc};
use lifehub_schema::finance::{FinanceCreate, FinancePatch};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, user_id, entry_type, amount, category, description, entry_date, created_at, updated_at";

pub(crate) async fn list(
    pool: &SqlitePool,
    user_id: &str,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<DbFinanceEntry>, HubError> {
    let rows = match range {
        Some((from, to)) => {
            sqlx::query_as::<_, DbFinanceEntry>(&format!(
                r#"
            SELECT {COLUMNS} FROM finance_entries
            WHERE user_id = ? AND entry_date >= ? AND entry_date <= ?
            ORDER BY entry_date DESC, id DESC
            "#
            ))
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbFinanceEntry>(&format!(
                r#"
            SELECT {COLUMNS} FROM finance_entries
            WHERE user_id = ?
            ORDER BY entry_date DESC, id DESC
            "#
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
    create: &FinanceCreate,
) -> Result<DbFinanceEntry, HubError> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbFinanceEntry>(&format!(
        r#"
    INSERT INTO finance_entries (user_id, entry_type, amount, category, description, entry_date, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING {COLUMNS}
    "#
    ))
    .bind(user_id)
    .bind(&create.entry_type)
    .bind(create.amount)
    .bind(&create.category)
    .bind(&create.description)
    .bind(create.entry_date)
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
    patch: &FinancePatch,
) -> Result<DbFinanceEntry, HubError> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, DbFinanceEntry>(&format!(
        r#"
    UPDATE finance_entries SET
        entry_type = COALESCE(?, entry_type),
        amount = COALESCE(?, amount),
        category = COALESCE(?, category),
        description = COALESCE(?, description),
        entry_date = COALESCE(?, entry_date),
        updated_at = ?
    WHERE id = ? AND user_id = ?
    RETURNING {COLUMNS}
    "#
    ))
    .bind(&patch.entry_type)
    .bind(patch.amount)
    .bind(&patch.category)
    .bind(&patch.description)
    .bind(patch.entry_date)
    .bind(now)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    row.ok_or(HubError::NotFound)
}

pub(crate) async fn delete(pool: &SqlitePool, user_id: &str, id: i64) -> Result<(), HubError> {
    let res = sqlx::query("DELETE FROM finance_entries WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(HubError::NotFound);
    }
    Ok(())
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mood entry as returned by the API. One per user per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub entry_date: NaiveDate,
    pub mood_score: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/mood body. Posting for a date that already has an entry updates
/// it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodUpsert {
    pub entry_date: NaiveDate,
    pub mood_score: i64,
    #[serde(default)]
    pub note: Option<String>,
}

/// PUT /api/mood/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodPatch {
    #[serde(default)]
    pub mood_score: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

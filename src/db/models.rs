use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;

use lifehub_schema as schema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTask {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTask> for schema::Task {
    fn from(row: DbTask) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            priority: row.priority,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbMoodEntry {
    pub id: i64,
    pub user_id: String,
    pub entry_date: NaiveDate,
    pub mood_score: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbMoodEntry> for schema::MoodEntry {
    fn from(row: DbMoodEntry) -> Self {
        Self {
            id: row.id,
            entry_date: row.entry_date,
            mood_score: row.mood_score,
            note: row.note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbFinanceEntry {
    pub id: i64,
    pub user_id: String,
    pub entry_type: String,
    pub amount: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbFinanceEntry> for schema::FinanceEntry {
    fn from(row: DbFinanceEntry) -> Self {
        Self {
            id: row.id,
            entry_type: row.entry_type,
            amount: row.amount,
            category: row.category,
            description: row.description,
            entry_date: row.entry_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbFolder {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub is_default: bool,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbFolder> for schema::Folder {
    fn from(row: DbFolder) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_default: row.is_default,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbNote {
    pub id: i64,
    pub user_id: String,
    pub folder_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbNote> for schema::Note {
    fn from(row: DbNote) -> Self {
        Self {
            id: row.id,
            folder_id: row.folder_id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCalendar {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub color: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbCalendar> for schema::Calendar {
    fn from(row: DbCalendar) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
            is_default: row.is_default,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCalendarEvent {
    pub id: i64,
    pub user_id: String,
    pub calendar_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_all_day: bool,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbCalendarEvent> for schema::CalendarEvent {
    fn from(row: DbCalendarEvent) -> Self {
        Self {
            id: row.id,
            calendar_id: row.calendar_id,
            title: row.title,
            description: row.description,
            location: row.location,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            is_all_day: row.is_all_day,
            color: row.color,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl DbCalendarEvent {
    /// Reduce to what the layout engine needs.
    pub fn to_span(&self) -> lifehub_calendar_core::EventSpan {
        lifehub_calendar_core::EventSpan {
            id: self.id,
            start: self.starts_at,
            end: self.ends_at,
            all_day: self.is_all_day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub timezone: Option<String>,
    pub preferences: Json<Value>,
    pub social_links: Json<Value>,
    pub notification_settings: Json<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbProfile> for schema::Profile {
    fn from(row: DbProfile) -> Self {
        Self {
            display_name: row.display_name,
            timezone: row.timezone,
            preferences: row.preferences.0,
            social_links: row.social_links.0,
            notification_settings: row.notification_settings.0,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWidgetType {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub default_config: Json<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<DbWidgetType> for schema::WidgetType {
    fn from(row: DbWidgetType) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            default_config: row.default_config.0,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUserWidget {
    pub id: i64,
    pub user_id: String,
    pub widget_type_id: i64,
    pub position: i64,
    pub width: i64,
    pub height: i64,
    pub config: Json<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbUserWidget> for schema::Widget {
    fn from(row: DbUserWidget) -> Self {
        Self {
            id: row.id,
            widget_type_id: row.widget_type_id,
            position: row.position,
            width: row.width,
            height: row.height,
            config: row.config.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

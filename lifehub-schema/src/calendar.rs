use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Calendar as returned by the API. Exactly one per user carries
/// `is_default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/calendars body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCreate {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// Calendar event as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
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

/// POST /api/calendar/events body. Without `calendar_id` the event lands on
/// the user's default calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    #[serde(default)]
    pub calendar_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub is_all_day: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
}

/// PUT /api/calendar/events/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default)]
    pub calendar_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_all_day: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
}

/// GET /api/calendar/layout response: one cell per visible day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarLayout {
    pub view: String,
    pub timezone: String,
    pub start: NaiveDate,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Event ids in the all-day lane.
    pub all_day: Vec<i64>,
    pub timed: Vec<TimedPlacement>,
    /// Events withheld from the grid ("+N more").
    pub hidden: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedPlacement {
    pub event_id: i64,
    pub top_px: f32,
    pub height_px: f32,
    pub column: u32,
    pub columns: u32,
}

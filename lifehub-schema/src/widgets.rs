use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Catalog entry a dashboard widget can be instantiated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetType {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub default_config: Value,
    pub created_at: DateTime<Utc>,
}

/// POST /api/widget-types body (service tier only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetTypeCreate {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_config: Option<Value>,
}

/// A user's widget instance: one per widget type, at most 20 per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: i64,
    pub widget_type_id: i64,
    pub position: i64,
    pub width: i64,
    pub height: i64,
    pub config: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/widgets body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetCreate {
    pub widget_type_id: i64,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub config: Option<Value>,
}

/// PUT /api/widgets/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetPatch {
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub config: Option<Value>,
}

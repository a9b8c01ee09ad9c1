use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile as returned by the API; 1:1 with the auth user. The three blobs
/// are free-form JSON owned by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: Option<String>,
    pub timezone: Option<String>,
    pub preferences: Value,
    pub social_links: Value,
    pub notification_settings: Value,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: None,
            timezone: None,
            preferences: Value::Object(serde_json::Map::new()),
            social_links: Value::Object(serde_json::Map::new()),
            notification_settings: Value::Object(serde_json::Map::new()),
            created_at: None,
            updated_at: None,
        }
    }
}

/// PUT /api/profile body; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub preferences: Option<Value>,
    #[serde(default)]
    pub social_links: Option<Value>,
    #[serde(default)]
    pub notification_settings: Option<Value>,
}

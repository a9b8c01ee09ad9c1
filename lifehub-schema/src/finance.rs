use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Finance entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: i64,
    pub entry_type: String,
    pub amount: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/finance body. `entry_type` must be one of income, expense,
/// transfer; `amount` must be positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceCreate {
    pub entry_type: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub entry_date: NaiveDate,
}

/// PUT /api/finance/{id} body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancePatch {
    #[serde(default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
}

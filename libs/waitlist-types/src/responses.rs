use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public fields of a created waitlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub message: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate waitlist numbers shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistStats {
    pub total: i64,
}

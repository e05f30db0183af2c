use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub user_book: i64,
    pub date: NaiveDate,
    pub pages_read: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub const DEFAULT_SESSION_ORDERING: &str = "-date";
pub const DEFAULT_SUMMARY_DAYS: u32 = 30;

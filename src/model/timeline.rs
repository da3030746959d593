use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

/// New timeline entry.
///
/// `start` and `end` accept any JSON value and are coerced into dates server-side: date
/// strings, epoch-millisecond numbers or numeric strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimelineDto {
    pub token: Option<String>,
    #[serde(default)]
    pub start: Option<Value>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub end: Option<Value>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTimelineDto {
    pub token: Option<String>,
    pub start: Option<Value>,
    pub end: Option<Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the append-only event log. Rows are never updated or deleted.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub event_type: String,
    pub user_email: Option<String>,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Input for the single write path.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_type: String,
    pub user_email: Option<String>,
    pub payload: serde_json::Value,
}

/// Store-assigned fields returned by an insert.
#[derive(Debug, Clone, FromRow)]
pub struct InsertedEvent {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregated index-mode row: a notebook name and its event count.
#[derive(Debug, Clone, FromRow)]
pub struct NotebookCount {
    pub notebook: String,
    pub events: i64,
}

// Event ingestion DTOs
//
// The payload is a semantic document: a string-keyed JSON object whose
// nested structure is opaque to the store and interpreted only by the
// dashboard renderer. Modeling it as `serde_json::Map` rejects non-object
// payloads at deserialization time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Request to record one interaction event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Short tag classifying the event (e.g. "question_asked").
    /// Required and must be non-empty.
    #[schema(example = "question_asked")]
    pub event_type: String,
    /// Email of the originating user, when known. Absence is distinct from
    /// an empty string and is rendered as "(unknown)" on the dashboard.
    #[serde(default)]
    pub user_email: Option<String>,
    /// Arbitrary JSON object stored verbatim. Conventional keys read by the
    /// dashboard: `notebook`, `question`, `response`, `mode`.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub payload: Map<String, Value>,
}

/// Response for a successfully recorded event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventCreated {
    /// Store-assigned identifier, strictly increasing in insertion order.
    #[schema(example = 42)]
    pub id: i64,
    /// Server-assigned insertion timestamp, UTC, serialized as ISO-8601.
    pub created_at: DateTime<Utc>,
}

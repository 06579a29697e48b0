use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::journal::repo::JournalEntry;
use crate::sentiment::SentimentLabel;

// Text fields arrive as Option so a missing field is our 400, not a
// framework-level deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Projection of an entry returned to its owner.
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: Uuid,
    pub text: String,
    pub score: f64,
    pub label: SentimentLabel,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<JournalEntry> for EntryView {
    fn from(e: JournalEntry) -> Self {
        Self {
            id: e.id,
            text: e.text,
            score: e.sentiment_score,
            label: e.sentiment_label,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedEntryResponse {
    pub message: String,
    pub id: Uuid,
    pub text: String,
    pub score: f64,
    pub label: SentimentLabel,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct UpdatedEntryResponse {
    pub message: String,
    pub entry: EntryView,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

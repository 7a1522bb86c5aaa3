use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored proposal with its reduced analytics
/// (word count, reading time, lexicon sentiment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProposalRow {
    pub id: Uuid,
    pub content: String,
    pub job_description: String,
    pub profession: String,
    pub ai_model: String,
    pub word_count: i32,
    pub reading_time: i32,
    /// "Positive" | "Neutral" | "Negative"
    pub sentiment: String,
    pub created_at: DateTime<Utc>,
}

//! Proposal history: a capped, newest-first list of generated proposals.
//!
//! Only the newest `HISTORY_LIMIT` proposals are kept; every save trims the rest.
//! Each row embeds a reduced analytics subset computed locally at save time.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::sentiment::{lexicon_sentiment, Sentiment};
use crate::analysis::tokenizer;
use crate::errors::AppError;
use crate::models::proposal::ProposalRow;
use crate::proposals::drafting::DEFAULT_MODEL;

pub const HISTORY_LIMIT: i64 = 50;

/// A proposal to store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProposal {
    pub content: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub ai_model: Option<String>,
}

/// The analytics subset stored alongside each proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredAnalytics {
    pub word_count: usize,
    pub reading_time: usize,
    pub sentiment: Sentiment,
}

impl StoredAnalytics {
    pub fn from_content(content: &str) -> Self {
        let word_count = tokenizer::word_count(content);
        Self {
            word_count,
            reading_time: tokenizer::reading_time_minutes(word_count),
            sentiment: lexicon_sentiment(content),
        }
    }
}

/// History listing filter. `search` is a case-insensitive substring over
/// content or profession; `model` is an exact model id (`"all"` disables it).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposalFilter {
    pub search: Option<String>,
    pub model: Option<String>,
}

impl ProposalFilter {
    pub fn matches(&self, row: &ProposalRow) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                row.content.to_lowercase().contains(&term)
                    || row.profession.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let matches_model = match self.model.as_deref().map(str::trim) {
            Some(model) if !model.is_empty() && model != "all" => row.ai_model == model,
            _ => true,
        };

        matches_search && matches_model
    }

    pub fn apply(&self, rows: Vec<ProposalRow>) -> Vec<ProposalRow> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

/// Persistence for proposal history. Every implementation keeps at most
/// `HISTORY_LIMIT` rows and lists them newest first.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Inserts a proposal and trims history to the newest `HISTORY_LIMIT` rows.
    async fn save(&self, proposal: &NewProposal) -> Result<ProposalRow, AppError>;

    async fn list(&self) -> Result<Vec<ProposalRow>, AppError>;

    async fn get(&self, id: Uuid) -> Result<ProposalRow, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

/// Validates a new proposal and computes its stored analytics.
pub fn build_row(proposal: &NewProposal) -> Result<ProposalRow, AppError> {
    if proposal.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let analytics = StoredAnalytics::from_content(&proposal.content);
    let ai_model = proposal
        .ai_model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MODEL);

    Ok(ProposalRow {
        id: Uuid::new_v4(),
        content: proposal.content.clone(),
        job_description: proposal.job_description.clone(),
        profession: proposal.profession.clone(),
        ai_model: ai_model.to_string(),
        word_count: analytics.word_count as i32,
        reading_time: analytics.reading_time as i32,
        sentiment: analytics.sentiment.as_str().to_string(),
        created_at: Utc::now(),
    })
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Proposal {id} not found"))
}

/// Postgres-backed history.
pub struct PgProposalStore {
    pool: PgPool,
}

impl PgProposalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProposalStore for PgProposalStore {
    async fn save(&self, proposal: &NewProposal) -> Result<ProposalRow, AppError> {
        let new_row = build_row(proposal)?;
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProposalRow>(
            r#"
            INSERT INTO proposals
                (id, content, job_description, profession, ai_model,
                 word_count, reading_time, sentiment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(new_row.id)
        .bind(&new_row.content)
        .bind(&new_row.job_description)
        .bind(&new_row.profession)
        .bind(&new_row.ai_model)
        .bind(new_row.word_count)
        .bind(new_row.reading_time)
        .bind(&new_row.sentiment)
        .bind(new_row.created_at)
        .fetch_one(&mut *tx)
        .await?;

        let trimmed = sqlx::query(
            r#"
            DELETE FROM proposals
            WHERE id NOT IN (
                SELECT id FROM proposals ORDER BY created_at DESC, id DESC LIMIT $1
            )
            "#,
        )
        .bind(HISTORY_LIMIT)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        info!(
            "Saved proposal {} ({} words); trimmed {} old entries",
            row.id, row.word_count, trimmed
        );
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ProposalRow>, AppError> {
        let rows = sqlx::query_as::<_, ProposalRow>(
            "SELECT * FROM proposals ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<ProposalRow, AppError> {
        sqlx::query_as::<_, ProposalRow>("SELECT * FROM proposals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM proposals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(not_found(id));
        }
        info!("Deleted proposal {id}");
        Ok(())
    }
}

/// In-process history, newest first. Used by router and cap tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryProposalStore {
    rows: std::sync::Mutex<Vec<ProposalRow>>,
}

#[cfg(test)]
#[async_trait]
impl ProposalStore for MemoryProposalStore {
    async fn save(&self, proposal: &NewProposal) -> Result<ProposalRow, AppError> {
        let row = build_row(proposal)?;
        let mut rows = self.rows.lock().unwrap();
        rows.insert(0, row.clone());
        rows.truncate(HISTORY_LIMIT as usize);
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ProposalRow>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: Uuid) -> Result<ProposalRow, AppError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::sentiment::SentimentLabel;

#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl JournalEntry {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        text: &str,
        score: f64,
        label: SentimentLabel,
    ) -> anyhow::Result<JournalEntry> {
        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (user_id, text, sentiment_score, sentiment_label)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, text, sentiment_score, sentiment_label, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(text)
        .bind(score)
        .bind(label)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<JournalEntry>> {
        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT id, user_id, text, sentiment_score, sentiment_label, created_at, updated_at
            FROM journal_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(entry)
    }

    pub async fn list_for_user(
        db: &PgPool,
        user_id: Uuid,
        order: SortOrder,
    ) -> anyhow::Result<Vec<JournalEntry>> {
        let query = match order {
            SortOrder::NewestFirst => {
                r#"
                SELECT id, user_id, text, sentiment_score, sentiment_label, created_at, updated_at
                FROM journal_entries
                WHERE user_id = $1
                ORDER BY created_at DESC
                "#
            }
            SortOrder::OldestFirst => {
                r#"
                SELECT id, user_id, text, sentiment_score, sentiment_label, created_at, updated_at
                FROM journal_entries
                WHERE user_id = $1
                ORDER BY created_at ASC
                "#
            }
        };
        let entries = sqlx::query_as::<_, JournalEntry>(query)
            .bind(user_id)
            .fetch_all(db)
            .await?;
        Ok(entries)
    }

    /// Persist a new text together with its freshly computed classification.
    /// `created_at` is immutable; only `updated_at` moves.
    pub async fn update_text(
        db: &PgPool,
        id: Uuid,
        text: &str,
        score: f64,
        label: SentimentLabel,
    ) -> anyhow::Result<JournalEntry> {
        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            UPDATE journal_entries
            SET text = $2, sentiment_score = $3, sentiment_label = $4, updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, text, sentiment_score, sentiment_label, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(score)
        .bind(label)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM journal_entries WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}

//! Result repository
//!
//! Append-only: results are created and listed, never changed.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewResult;

/// Result record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct QuizResult {
    pub id: i64,
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
    pub timestamp: DateTime<Utc>,
}

/// Result repository
pub struct ResultRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a result stamped with the current server time.
    pub async fn create(&self, result: NewResult) -> Result<QuizResult, DbError> {
        self.create_at(result, Utc::now()).await
    }

    pub(crate) async fn create_at(
        &self,
        result: NewResult,
        timestamp: DateTime<Utc>,
    ) -> Result<QuizResult, DbError> {
        let created = sqlx::query_as::<_, QuizResult>(
            r#"
            INSERT INTO results (username, score, total_questions, timestamp)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, score, total_questions, timestamp
            "#,
        )
        .bind(&result.username)
        .bind(result.score)
        .bind(result.total_questions)
        .bind(timestamp)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = created.id, username = %created.username, "result recorded");
        Ok(created)
    }

    /// All results, most recent first.
    pub async fn list(&self) -> Result<Vec<QuizResult>, DbError> {
        let results = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT id, username, score, total_questions, timestamp
            FROM results
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}

//! Quiz collection repository
//!
//! Handles collection CRUD with:
//! - Atomic creation with the initial batch of questions (transaction)
//! - Question counts computed live by LEFT JOIN, never stored
//! - Cascade delete of questions in the same transaction as the collection

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::quizzes::insert_question;
use super::DbError;
use crate::models::{CollectionPatch, NewCollection, NewQuestion};

/// Collection with its live question count
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CollectionWithCount {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub question_count: i64,
}

const SELECT_WITH_COUNT: &str = r#"
    SELECT
        c.id,
        c.title,
        c.description,
        c.difficulty,
        c.category_id,
        c.created_at,
        COUNT(q.id) AS question_count
    FROM quiz_collections c
    LEFT JOIN quizzes q ON q.collection_id = c.id
"#;

async fn fetch_with_count(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<CollectionWithCount>, sqlx::Error> {
    sqlx::query_as::<_, CollectionWithCount>(&format!(
        "{SELECT_WITH_COUNT} WHERE c.id = ? GROUP BY c.id"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Collection repository
pub struct CollectionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CollectionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a category's collections, each with its question count.
    pub async fn list_for_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<CollectionWithCount>, DbError> {
        let collections = sqlx::query_as::<_, CollectionWithCount>(&format!(
            "{SELECT_WITH_COUNT} WHERE c.category_id = ? GROUP BY c.id ORDER BY c.id"
        ))
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(collections)
    }

    /// Create a collection and its questions (atomic).
    ///
    /// Either the collection and every question are stored, or nothing is.
    /// Readers never observe the collection with a partial question set.
    pub async fn create_with_questions(
        &self,
        collection: NewCollection,
        questions: Vec<NewQuestion>,
    ) -> Result<CollectionWithCount, DbError> {
        let mut tx = self.pool.begin().await?;

        let (collection_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO quiz_collections (title, description, difficulty, category_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&collection.title)
        .bind(&collection.description)
        .bind(collection.difficulty.as_str())
        .bind(collection.category_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for question in &questions {
            insert_question(&mut *tx, collection_id, question).await?;
        }

        let created = fetch_with_count(&mut tx, collection_id)
            .await?
            .ok_or_else(|| DbError::not_found("quiz collection", collection_id))?;

        tx.commit().await?;

        tracing::debug!(
            id = created.id,
            category_id = created.category_id,
            questions = created.question_count,
            "quiz collection created"
        );
        Ok(created)
    }

    /// Get a single collection with its question count.
    pub async fn get(&self, id: i64) -> Result<CollectionWithCount, DbError> {
        let mut conn = self.pool.acquire().await?;
        fetch_with_count(&mut conn, id)
            .await?
            .ok_or_else(|| DbError::not_found("quiz collection", id))
    }

    /// Apply the fields present in `patch` to a collection's own columns.
    pub async fn update(
        &self,
        id: i64,
        patch: CollectionPatch,
    ) -> Result<CollectionWithCount, DbError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE quiz_collections SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                difficulty = COALESCE(?, difficulty),
                category_id = COALESCE(?, category_id)
            WHERE id = ?
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.difficulty.as_ref().map(|d| d.as_str()))
        .bind(patch.category_id)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(DbError::not_found("quiz collection", id));
        }

        let collection = fetch_with_count(&mut tx, id)
            .await?
            .ok_or_else(|| DbError::not_found("quiz collection", id))?;

        tx.commit().await?;
        Ok(collection)
    }

    /// Delete a collection and its questions.
    ///
    /// Returns `false` if no collection had this id.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM quizzes WHERE collection_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM quiz_collections WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(id, deleted, "quiz collection delete");
        Ok(deleted > 0)
    }
}

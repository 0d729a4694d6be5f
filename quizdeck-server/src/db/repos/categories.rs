//! Category repository
//!
//! - create: plain INSERT, duplicate names surface as a constraint violation
//! - delete: removes questions, collections and the category in one transaction

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::CategoryName;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(categories)
    }

    /// Create a category. Fails with `DbError::Constraint` if the name is taken.
    pub async fn create(&self, name: CategoryName) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::Constraint { .. } => DbError::Constraint {
                message: format!("category '{}' already exists", name.as_str()),
            },
            other => other,
        })?;

        tracing::debug!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Delete a category together with its collections and their questions.
    ///
    /// Returns `false` if no category had this id.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM quizzes
            WHERE collection_id IN (SELECT id FROM quiz_collections WHERE category_id = ?)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM quiz_collections WHERE category_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(id, deleted, "category delete");
        Ok(deleted > 0)
    }
}

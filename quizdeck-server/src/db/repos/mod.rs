//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one request:
//! - Uses JOINs for list operations (no N+1)
//! - Maps unique/foreign-key violations to `DbError::Constraint`
//! - Uses transactions for multi-step operations

pub mod categories;
pub mod collections;
pub mod quizzes;
pub mod results;

pub use categories::{Category, CategoryRepo};
pub use collections::{CollectionRepo, CollectionWithCount};
pub use quizzes::{Quiz, QuizRepo};
pub use results::{QuizResult, ResultRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {message}")]
    Constraint { message: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return Self::Constraint {
                    message: db_err.message().to_owned(),
                };
            }
        }
        Self::Sqlx(err)
    }
}

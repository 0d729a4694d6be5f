//! Quiz (question) repository
//!
//! Options are stored as four columns and handed out as an ordered list.

use sqlx::{Executor, FromRow, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewQuestion, QuizPatch};

const QUIZ_COLUMNS: &str =
    "id, question, option1, option2, option3, option4, correct_answer, collection_id";

/// Quiz record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Quiz {
    pub id: i64,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_answer: String,
    pub collection_id: i64,
}

impl Quiz {
    /// Options in storage order.
    pub fn options(&self) -> Vec<String> {
        vec![
            self.option1.clone(),
            self.option2.clone(),
            self.option3.clone(),
            self.option4.clone(),
        ]
    }
}

/// Insert one question row. Shared by single creation and collection batches
/// so both run through the same statement.
pub(crate) async fn insert_question<'e, E>(
    executor: E,
    collection_id: i64,
    question: &NewQuestion,
) -> Result<Quiz, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let [o1, o2, o3, o4] = question.options.as_array();

    sqlx::query_as::<_, Quiz>(&format!(
        r#"
        INSERT INTO quizzes (question, option1, option2, option3, option4, correct_answer, collection_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {QUIZ_COLUMNS}
        "#
    ))
    .bind(&question.question)
    .bind(o1)
    .bind(o2)
    .bind(o3)
    .bind(o4)
    .bind(&question.correct_answer)
    .bind(collection_id)
    .fetch_one(executor)
    .await
}

/// Quiz repository
pub struct QuizRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuizRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Questions of one collection in insertion order.
    pub async fn list_for_collection(&self, collection_id: i64) -> Result<Vec<Quiz>, DbError> {
        let quizzes = sqlx::query_as::<_, Quiz>(&format!(
            "SELECT {QUIZ_COLUMNS} FROM quizzes WHERE collection_id = ? ORDER BY id"
        ))
        .bind(collection_id)
        .fetch_all(self.pool)
        .await?;

        Ok(quizzes)
    }

    /// Every question of every collection in a category, flattened.
    ///
    /// Ordered by collection then question, which matches concatenating
    /// `list_for_collection` over the category's collections.
    pub async fn list_for_category(&self, category_id: i64) -> Result<Vec<Quiz>, DbError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT q.id, q.question, q.option1, q.option2, q.option3, q.option4,
                   q.correct_answer, q.collection_id
            FROM quizzes q
            JOIN quiz_collections c ON c.id = q.collection_id
            WHERE c.category_id = ?
            ORDER BY c.id, q.id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn get(&self, id: i64) -> Result<Quiz, DbError> {
        sqlx::query_as::<_, Quiz>(&format!("SELECT {QUIZ_COLUMNS} FROM quizzes WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("quiz", id))
    }

    /// Add a question to an existing collection.
    ///
    /// An unknown `collection_id` is a constraint violation.
    pub async fn create(&self, collection_id: i64, question: NewQuestion) -> Result<Quiz, DbError> {
        let quiz = insert_question(self.pool, collection_id, &question).await?;
        tracing::debug!(id = quiz.id, collection_id, "quiz created");
        Ok(quiz)
    }

    /// Apply the fields present in `patch`, leaving the rest unchanged.
    pub async fn update(&self, id: i64, patch: QuizPatch) -> Result<Quiz, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let options = patch.options.as_ref().map(|o| o.as_array());
        let option = |i: usize| options.map(|o| o[i].as_str());

        let quiz = sqlx::query_as::<_, Quiz>(&format!(
            r#"
            UPDATE quizzes SET
                question = COALESCE(?, question),
                option1 = COALESCE(?, option1),
                option2 = COALESCE(?, option2),
                option3 = COALESCE(?, option3),
                option4 = COALESCE(?, option4),
                correct_answer = COALESCE(?, correct_answer)
            WHERE id = ?
            RETURNING {QUIZ_COLUMNS}
            "#
        ))
        .bind(patch.question.as_deref())
        .bind(option(0))
        .bind(option(1))
        .bind(option(2))
        .bind(option(3))
        .bind(patch.correct_answer.as_deref())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("quiz", id))?;

        tracing::debug!(id, "quiz updated");
        Ok(quiz)
    }

    /// Returns `false` if no quiz had this id.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let deleted = sqlx::query("DELETE FROM quizzes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

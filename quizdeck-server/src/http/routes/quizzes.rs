//! Question endpoints, including the legacy category-wide listing

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Quiz, QuizRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{NewQuestion, QuizPatch};

/// `?category={id}` filter
#[derive(Deserialize)]
pub struct CategoryFilter {
    pub category: i64,
}

/// One question as submitted by a client
#[derive(Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionRequest {
    pub fn validate(&self) -> Result<NewQuestion, ApiError> {
        Ok(NewQuestion::new(
            &self.question,
            self.options.clone(),
            &self.correct_answer,
        )?)
    }
}

/// Create quiz request
#[derive(Deserialize)]
pub struct CreateQuizRequest {
    #[serde(flatten)]
    pub question: QuestionRequest,
    pub collection_id: i64,
}

/// Update quiz request; absent fields stay unchanged
#[derive(Deserialize)]
pub struct UpdateQuizRequest {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
}

/// Quiz response
#[derive(Serialize)]
pub struct QuizResponse {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub collection_id: i64,
}

impl From<Quiz> for QuizResponse {
    fn from(q: Quiz) -> Self {
        Self {
            id: q.id,
            options: q.options(),
            question: q.question,
            correct_answer: q.correct_answer,
            collection_id: q.collection_id,
        }
    }
}

/// GET /quizzes?category={id} - every question of every collection in a category
async fn list_quizzes(
    State(state): State<Arc<AppState>>,
    ValidQuery(filter): ValidQuery<CategoryFilter>,
) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    let quizzes = QuizRepo::new(&state.pool)
        .list_for_category(filter.category)
        .await?;

    Ok(Json(quizzes.into_iter().map(QuizResponse::from).collect()))
}

/// POST /quizzes - add a single question to a collection
async fn create_quiz(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateQuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let question = req.question.validate()?;
    let quiz = QuizRepo::new(&state.pool)
        .create(req.collection_id, question)
        .await?;

    Ok(Json(QuizResponse::from(quiz)))
}

/// PUT /quizzes/{id} - partial update
async fn update_quiz(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UpdateQuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let patch = QuizPatch::new(
        req.question.as_deref(),
        req.options,
        req.correct_answer.as_deref(),
    )?;
    let quiz = QuizRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(QuizResponse::from(quiz)))
}

/// DELETE /quizzes/{id}
async fn delete_quiz(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    if !QuizRepo::new(&state.pool).delete(id).await? {
        return Err(ApiError::not_found("quiz", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quizzes", get(list_quizzes).post(create_quiz))
        .route("/quizzes/{id}", put(update_quiz).delete(delete_quiz))
}

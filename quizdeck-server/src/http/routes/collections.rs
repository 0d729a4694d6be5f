//! Quiz collection endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::quizzes::{CategoryFilter, QuestionRequest, QuizResponse};
use crate::db::repos::{CollectionRepo, CollectionWithCount, QuizRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::NewCollection;

/// Create collection request
#[derive(Deserialize)]
pub struct CreateCollectionRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub category_id: i64,
    pub questions: Vec<QuestionRequest>,
}

/// Collection response
#[derive(Serialize)]
pub struct CollectionResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub category_id: i64,
    pub created_at: String,
    pub question_count: i64,
}

impl From<CollectionWithCount> for CollectionResponse {
    fn from(c: CollectionWithCount) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            difficulty: c.difficulty,
            category_id: c.category_id,
            created_at: c.created_at.to_rfc3339(),
            question_count: c.question_count,
        }
    }
}

/// GET /quiz-collections?category={id} - list a category's collections
async fn list_collections(
    State(state): State<Arc<AppState>>,
    ValidQuery(filter): ValidQuery<CategoryFilter>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let collections = CollectionRepo::new(&state.pool)
        .list_for_category(filter.category)
        .await?;

    Ok(Json(
        collections.into_iter().map(CollectionResponse::from).collect(),
    ))
}

/// POST /quiz-collections - create a collection with its questions
async fn create_collection(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateCollectionRequest>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let collection = NewCollection::new(
        &req.title,
        &req.description,
        req.difficulty.as_deref(),
        req.category_id,
    )?;
    // Every entry is validated before anything is written
    let questions = req
        .questions
        .iter()
        .map(QuestionRequest::validate)
        .collect::<Result<Vec<_>, _>>()?;

    let created = CollectionRepo::new(&state.pool)
        .create_with_questions(collection, questions)
        .await?;

    Ok(Json(CollectionResponse::from(created)))
}

/// GET /quiz-collections/{id} - get a single collection
async fn get_collection(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<CollectionResponse>, ApiError> {
    let collection = CollectionRepo::new(&state.pool).get(id).await?;
    Ok(Json(CollectionResponse::from(collection)))
}

/// DELETE /quiz-collections/{id} - delete a collection and its questions
async fn delete_collection(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    if !CollectionRepo::new(&state.pool).delete(id).await? {
        return Err(ApiError::not_found("quiz collection", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /quiz-collections/{id}/questions - list a collection's questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    let quizzes = QuizRepo::new(&state.pool).list_for_collection(id).await?;
    Ok(Json(quizzes.into_iter().map(QuizResponse::from).collect()))
}

/// Collection routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/quiz-collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/quiz-collections/{id}",
            get(get_collection).delete(delete_collection),
        )
        .route("/quiz-collections/{id}/questions", get(list_questions))
}

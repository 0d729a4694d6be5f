//! Result endpoints (append-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{QuizResult, ResultRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::NewResult;

/// Create result request. Any client-sent `timestamp` is ignored.
#[derive(Deserialize)]
pub struct CreateResultRequest {
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
}

/// Result response
#[derive(Serialize)]
pub struct ResultResponse {
    pub id: i64,
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
    pub timestamp: String,
}

impl From<QuizResult> for ResultResponse {
    fn from(r: QuizResult) -> Self {
        Self {
            id: r.id,
            username: r.username,
            score: r.score,
            total_questions: r.total_questions,
            timestamp: r.timestamp.to_rfc3339(),
        }
    }
}

/// POST /results - record a result
async fn create_result(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateResultRequest>,
) -> Result<Json<ResultResponse>, ApiError> {
    let result = NewResult::new(&req.username, req.score, req.total_questions)?;
    let created = ResultRepo::new(&state.pool).create(result).await?;

    Ok(Json(ResultResponse::from(created)))
}

/// GET /results - list results, newest first
async fn list_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ResultResponse>>, ApiError> {
    let results = ResultRepo::new(&state.pool).list().await?;
    Ok(Json(results.into_iter().map(ResultResponse::from).collect()))
}

/// Result routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/results", get(list_results).post(create_result))
}

//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::CategoryName;

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Category response
#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

/// POST /categories - create a category (400 on duplicate name)
async fn create_category(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let name = CategoryName::new(&req.name)?;
    let category = CategoryRepo::new(&state.pool).create(name).await?;

    Ok(Json(CategoryResponse::from(category)))
}

/// DELETE /categories/{id} - delete a category with its collections and questions
async fn delete_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    if !CategoryRepo::new(&state.pool).delete(id).await? {
        return Err(ApiError::not_found("category", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}

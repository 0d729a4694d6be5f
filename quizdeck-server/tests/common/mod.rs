#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use quizdeck_server::{build_router, create_pool, db::schema};

/// Router over a fresh SQLite file. Keep the `TempDir` alive for the test.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("api.db").display());
    let pool = create_pool(&url).await.expect("failed to create test pool");
    schema::run(&pool).await.expect("failed to create schema");

    TestApp {
        router: build_router(pool),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Create a category and return its id.
    pub async fn category(&self, name: &str) -> i64 {
        let (status, body) = self.post("/categories", serde_json::json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "create category: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a collection with the given questions and return the response body.
    pub async fn collection(&self, category_id: i64, title: &str, questions: Value) -> Value {
        let (status, body) = self
            .post(
                "/quiz-collections",
                serde_json::json!({
                    "title": title,
                    "description": format!("{title} description"),
                    "category_id": category_id,
                    "questions": questions,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create collection: {body}");
        body
    }
}

//! quizdeck-server: quiz content CRUD over HTTP
//!
//! Categories own quiz collections, collections own questions, and results
//! are an append-only log. Everything is stored in SQLite and served as
//! JSON by an axum router.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options};
pub use http::{build_router, run_server, serve, ServerConfig, ServerError};

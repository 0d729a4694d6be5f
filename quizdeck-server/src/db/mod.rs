//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed in explicitly - no process-wide handle
//! - Collection lists carry question counts via JOIN - no N+1 queries
//! - Rely on DB constraints, map violations - no check-then-insert
//! - Transactions for multi-step operations (batch create, cascade delete)

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_DATABASE_URL};
pub use repos::*;

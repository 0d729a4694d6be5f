//! Route handlers organized by resource

pub mod health;
pub mod categories;
pub mod collections;
pub mod quizzes;
pub mod results;

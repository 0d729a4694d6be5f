//! Quiz result validation

use super::validation::required_text;
use super::ValidationError;

const MAX_USERNAME_LEN: usize = 64;

/// A validated result submission.
///
/// The timestamp is never taken from the client; the repository assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
}

impl NewResult {
    /// # Rules
    /// - `username` non-empty, max 64 characters
    /// - `score` and `total_questions` non-negative
    /// - `score` not greater than `total_questions`
    pub fn new(username: &str, score: i64, total_questions: i64) -> Result<Self, ValidationError> {
        let username = required_text("username", username, MAX_USERNAME_LEN)?;

        if total_questions < 0 {
            return Err(ValidationError::OutOfRange {
                field: "total_questions",
                reason: "must not be negative",
            });
        }
        if score < 0 {
            return Err(ValidationError::OutOfRange {
                field: "score",
                reason: "must not be negative",
            });
        }
        if score > total_questions {
            return Err(ValidationError::OutOfRange {
                field: "score",
                reason: "must not exceed total_questions",
            });
        }

        Ok(Self {
            username,
            score,
            total_questions,
        })
    }
}

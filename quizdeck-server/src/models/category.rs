//! Category name validation

use super::validation::required_text;
use super::ValidationError;

/// Maximum length for category names
const MAX_CATEGORY_NAME_LEN: usize = 128;

/// Validated category name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a new category name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 128 characters
    ///
    /// # Example
    /// ```
    /// use quizdeck_server::models::CategoryName;
    ///
    /// assert!(CategoryName::new("General Knowledge").is_ok());
    /// assert!(CategoryName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("name", s, MAX_CATEGORY_NAME_LEN).map(Self)
    }

    /// Get the category name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

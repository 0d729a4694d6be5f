//! Quiz collection validation

use super::validation::{optional_text, required_text};
use super::ValidationError;

const MAX_TITLE_LEN: usize = 256;
const MAX_DESCRIPTION_LEN: usize = 2048;
const MAX_DIFFICULTY_LEN: usize = 32;

/// Free-form difficulty label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difficulty(String);

impl Difficulty {
    pub const DEFAULT: &'static str = "Medium";

    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("difficulty", s, MAX_DIFFICULTY_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

/// Validated fields of a collection about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollection {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category_id: i64,
}

impl NewCollection {
    /// Validate collection fields. A missing difficulty becomes `"Medium"`.
    ///
    /// # Example
    /// ```
    /// use quizdeck_server::models::NewCollection;
    ///
    /// let c = NewCollection::new("Capitals", "Europe", None, 1).unwrap();
    /// assert_eq!(c.difficulty.as_str(), "Medium");
    /// ```
    pub fn new(
        title: &str,
        description: &str,
        difficulty: Option<&str>,
        category_id: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required_text("title", title, MAX_TITLE_LEN)?,
            description: optional_text("description", description, MAX_DESCRIPTION_LEN)?,
            difficulty: difficulty.map(Difficulty::new).transpose()?.unwrap_or_default(),
            category_id,
        })
    }
}

/// Partial update of a collection's own fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category_id: Option<i64>,
}

impl CollectionPatch {
    pub fn new(
        title: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&str>,
        category_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title
                .map(|t| required_text("title", t, MAX_TITLE_LEN))
                .transpose()?,
            description: description
                .map(|d| optional_text("description", d, MAX_DESCRIPTION_LEN))
                .transpose()?,
            difficulty: difficulty.map(Difficulty::new).transpose()?,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults_to_medium() {
        let c = NewCollection::new("Capitals", "", None, 1).unwrap();
        assert_eq!(c.difficulty.as_str(), "Medium");
        assert_eq!(c.description, "");
    }

    #[test]
    fn difficulty_is_free_form() {
        let c = NewCollection::new("Capitals", "", Some("Brutal"), 1).unwrap();
        assert_eq!(c.difficulty.as_str(), "Brutal");
    }

    #[test]
    fn blank_difficulty_is_rejected() {
        let err = NewCollection::new("Capitals", "", Some(" "), 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "difficulty" });
    }

    #[test]
    fn title_required() {
        let err = NewCollection::new("", "desc", None, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn description_max_length() {
        let long = "d".repeat(2049);
        let err = NewCollection::new("t", &long, None, 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 2048, .. }));
    }

    #[test]
    fn patch_keeps_absent_fields_empty() {
        let patch = CollectionPatch::new(None, Some("new"), None, None).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.description.as_deref(), Some("new"));
        assert!(patch.difficulty.is_none());
    }
}

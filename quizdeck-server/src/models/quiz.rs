//! Question validation
//!
//! The same rules apply to a question posted on its own and to each entry
//! of a collection's initial batch. Question text, options and answers are
//! stored exactly as submitted.

use super::validation::{required_verbatim, verbatim_text};
use super::ValidationError;

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

const MAX_QUESTION_LEN: usize = 1024;
const MAX_OPTION_LEN: usize = 512;

/// Exactly four answer options, in display order.
///
/// Storage keeps them as `option1..option4`; the transport shape is an
/// ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options([String; OPTION_COUNT]);

impl Options {
    /// Validate a list of options.
    ///
    /// # Example
    /// ```
    /// use quizdeck_server::models::Options;
    ///
    /// let opts = vec!["Paris".into(), "London".into(), "Berlin".into(), "Madrid".into()];
    /// assert!(Options::new(opts).is_ok());
    /// assert!(Options::new(vec!["yes".into(), "no".into()]).is_err());
    /// ```
    pub fn new(values: Vec<String>) -> Result<Self, ValidationError> {
        let wrong_count = ValidationError::WrongCount {
            field: "options",
            expected: OPTION_COUNT,
            actual: values.len(),
        };
        if values.len() != OPTION_COUNT {
            return Err(wrong_count);
        }

        let checked = values
            .iter()
            .map(|v| verbatim_text("option", v, MAX_OPTION_LEN))
            .collect::<Result<Vec<_>, _>>()?;
        let options: [String; OPTION_COUNT] = checked.try_into().map_err(|_| wrong_count)?;

        Ok(Self(options))
    }

    pub fn as_array(&self) -> &[String; OPTION_COUNT] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }
}

/// A validated question ready to be attached to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub options: Options,
    /// Not checked against `options`.
    pub correct_answer: String,
}

impl NewQuestion {
    pub fn new(
        question: &str,
        options: Vec<String>,
        correct_answer: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: required_verbatim("question", question, MAX_QUESTION_LEN)?,
            options: Options::new(options)?,
            correct_answer: verbatim_text("correct_answer", correct_answer, MAX_OPTION_LEN)?,
        })
    }
}

/// Partial update of a question. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizPatch {
    pub question: Option<String>,
    pub options: Option<Options>,
    pub correct_answer: Option<String>,
}

impl QuizPatch {
    pub fn new(
        question: Option<&str>,
        options: Option<Vec<String>>,
        correct_answer: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: question
                .map(|q| required_verbatim("question", q, MAX_QUESTION_LEN))
                .transpose()?,
            options: options.map(Options::new).transpose()?,
            correct_answer: correct_answer
                .map(|a| verbatim_text("correct_answer", a, MAX_OPTION_LEN))
                .transpose()?,
        })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.question.is_none() && self.options.is_none() && self.correct_answer.is_none()
    }
}

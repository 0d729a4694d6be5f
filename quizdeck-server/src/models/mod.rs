//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod collection;
pub mod quiz;
pub mod result;

pub use validation::ValidationError;
pub use category::CategoryName;
pub use collection::{CollectionPatch, Difficulty, NewCollection};
pub use quiz::{NewQuestion, Options, QuizPatch, OPTION_COUNT};
pub use result::NewResult;

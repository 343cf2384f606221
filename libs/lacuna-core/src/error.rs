//! Error types for lacuna-core.

use thiserror::Error;

/// Result type alias using ExerciseError.
pub type Result<T> = std::result::Result<T, ExerciseError>;

/// Errors that can occur when building exercises from definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("exercise definition has no id")]
    MissingId,

    #[error("duplicate exercise id {id}")]
    DuplicateId { id: String },
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter at least one species name.")]
    EmptyInput,

    #[error("Invalid query item: {0}")]
    InvalidQueryItem(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

impl DomainError {
    /// Check if this error is the empty-input prompt
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyInput)
    }
}

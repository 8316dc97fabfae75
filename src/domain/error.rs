use std::fmt;

use super::model::id::BookId;

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldProblem {
    #[error("field required")]
    Missing,
    #[error("must not be empty or only whitespace")]
    Blank,
    #[error("must be a valid integer")]
    NotAnInteger,
    #[error("must be greater than or equal to {0}")]
    BelowMinimum(u32),
    #[error("must not exceed {0}")]
    TooLarge(u32),
    #[error("{0}")]
    Malformed(String),
}

/// A single rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: &'static str, problem: FieldProblem) -> Self {
        Self { field, problem }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book {0} not found")]
    NotFound(BookId),

    #[error("book {0} already exists")]
    AlreadyExists(BookId),

    #[error("invalid input: {}", join_fields(.0))]
    InvalidInput(Vec<FieldError>),
}

impl DomainError {
    pub fn invalid(field: &'static str, problem: FieldProblem) -> Self {
        Self::InvalidInput(vec![FieldError::new(field, problem)])
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Input checks applied before any mutation reaches the catalog.

use super::error::{DomainError, FieldError, FieldProblem};
use super::model::book::BookFields;

/// A string is present when it has at least one non-whitespace character.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Checks every field and reports all blank ones at once.
pub fn validate_fields(fields: &BookFields) -> Result<(), DomainError> {
    let errors: Vec<FieldError> = [
        ("name", fields.name.as_str()),
        ("author", fields.author.as_str()),
        ("publisher", fields.publisher.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !is_present(value))
    .map(|(field, _)| FieldError::new(field, FieldProblem::Blank))
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(errors))
    }
}

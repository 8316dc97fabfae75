use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DomainError, FieldProblem};

/// Book identifier. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub const MIN: u32 = 1;

    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw < i64::from(Self::MIN) {
            return Err(DomainError::invalid("id", FieldProblem::BelowMinimum(Self::MIN)));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::invalid("id", FieldProblem::TooLarge(u32::MAX)))
    }

    /// Parses a path segment or form value. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid("id", FieldProblem::NotAnInteger))?;
        Self::new(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use std::collections::HashMap;

use super::book::{Book, BookFields};
use super::id::BookId;
use crate::domain::error::DomainError;
use crate::domain::validation::validate_fields;

/// Catalog — aggregate root. Every record operation goes through here.
///
/// Ids are stable: deleting a book never renumbers the others.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: HashMap<BookId, Book>,
    /// Insertion order of the keys in `books`.
    order: Vec<BookId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from seed entries, numbering them 1, 2, 3... in order.
    pub fn from_seed(entries: impl IntoIterator<Item = BookFields>) -> Result<Self, DomainError> {
        let mut catalog = Self::new();
        for (index, fields) in entries.into_iter().enumerate() {
            let id = BookId::new(index as i64 + 1)?;
            catalog.create(id, fields)?;
        }
        Ok(catalog)
    }

    /// All books in insertion order.
    pub fn list(&self) -> Vec<&Book> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    pub fn get(&self, id: BookId) -> Result<&Book, DomainError> {
        self.books.get(&id).ok_or(DomainError::NotFound(id))
    }

    /// Validates the fields, then rejects a taken id.
    pub fn create(&mut self, id: BookId, fields: BookFields) -> Result<&Book, DomainError> {
        validate_fields(&fields)?;
        if self.books.contains_key(&id) {
            return Err(DomainError::AlreadyExists(id));
        }

        self.order.push(id);
        let book = self.books.entry(id).or_insert(Book::new(id, fields));
        Ok(&*book)
    }

    /// Replaces the fields in place. The id and position are kept.
    pub fn update(&mut self, id: BookId, fields: BookFields) -> Result<&Book, DomainError> {
        validate_fields(&fields)?;
        let book = self.books.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        book.replace_fields(fields);
        Ok(&*book)
    }

    /// Removes the book and returns what it held.
    pub fn delete(&mut self, id: BookId) -> Result<Book, DomainError> {
        let book = self.books.remove(&id).ok_or(DomainError::NotFound(id))?;
        self.order.retain(|existing| *existing != id);
        Ok(book)
    }
}

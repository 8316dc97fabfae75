use serde::{Deserialize, Serialize};

use super::id::BookId;

/// Editable part of a book. Used as the input of create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub name: String,
    pub author: String,
    pub publisher: String,
}

impl BookFields {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            publisher: publisher.into(),
        }
    }
}

/// A catalog record. Owned by the Catalog and changed only through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    name: String,
    author: String,
    publisher: String,
}

impl Book {
    pub(crate) fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            name: fields.name,
            author: fields.author,
            publisher: fields.publisher,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn fields(&self) -> BookFields {
        BookFields::new(&self.name, &self.author, &self.publisher)
    }

    pub(crate) fn replace_fields(&mut self, fields: BookFields) {
        self.name = fields.name;
        self.author = fields.author;
        self.publisher = fields.publisher;
    }
}

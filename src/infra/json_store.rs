use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::error::DomainError;
use crate::domain::model::book::BookFields;
use crate::domain::model::catalog::Catalog;
use crate::domain::repository::CatalogRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid seed entry: {0}")]
    Entry(#[from] DomainError),
}

/// One element of the seed array. Unknown keys (such as an embedded id) are ignored.
#[derive(Debug, Deserialize)]
struct SeedEntry {
    #[serde(alias = "nom")]
    name: String,
    #[serde(alias = "auteur")]
    author: String,
    #[serde(alias = "editeur")]
    publisher: String,
}

impl From<SeedEntry> for BookFields {
    fn from(entry: SeedEntry) -> Self {
        BookFields::new(entry.name, entry.author, entry.publisher)
    }
}

/// Read-only seed backed by a JSON file holding an array of books.
/// The entry at position k gets id k + 1.
pub struct JsonSeedRepository {
    path: PathBuf,
}

impl JsonSeedRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogRepository for JsonSeedRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let entries: Vec<SeedEntry> = serde_json::from_str(&content)?;
        let catalog = Catalog::from_seed(entries.into_iter().map(BookFields::from))?;
        Ok(Some(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::id::BookId;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonSeedRepository::new(dir.path().join("absent.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn loads_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("livres.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Roman", "author": "A1", "publisher": "P1"},
                {"nom": "Conte", "auteur": "A2", "editeur": "P2", "id": 40}
            ]"#,
        )
        .unwrap();

        let catalog = JsonSeedRepository::new(&path).load().unwrap().unwrap();
        assert_eq!(catalog.count(), 2);

        let second = catalog.get(BookId::new(2).unwrap()).unwrap();
        assert_eq!(second.name(), "Conte");
        assert_eq!(second.publisher(), "P2");
        assert!(catalog.get(BookId::new(40).unwrap()).is_err());
    }

    #[test]
    fn malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonSeedRepository::new(&path).load();
        assert!(matches!(result, Err(JsonStoreError::Json(_))));
    }

    #[test]
    fn blank_entry_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        std::fs::write(&path, r#"[{"name": " ", "author": "A", "publisher": "P"}]"#).unwrap();

        let result = JsonSeedRepository::new(&path).load();
        assert!(matches!(result, Err(JsonStoreError::Entry(_))));
    }
}

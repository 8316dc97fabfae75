use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::domain::model::book::{Book, BookFields};
use crate::domain::model::catalog::Catalog;
use crate::domain::model::id::BookId;
use crate::domain::repository::CatalogRepository;

use super::error::AppError;

/// Use cases over the shared Catalog.
///
/// Cloning yields another handle to the same catalog. Every mutation holds
/// the write lock for its whole check-then-modify sequence.
#[derive(Clone, Default)]
pub struct CatalogService {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogService {
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Loads the seed once. A missing seed yields an empty catalog.
    pub fn open<R: CatalogRepository>(repo: &R) -> Result<Self, AppError> {
        let catalog = match repo.load().map_err(|e| AppError::Storage(Box::new(e)))? {
            Some(catalog) => {
                info!(books = catalog.count(), "seed catalog loaded");
                catalog
            }
            None => {
                warn!("no seed found, starting with an empty catalog");
                Catalog::new()
            }
        };
        Ok(Self::from_catalog(catalog))
    }

    pub fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.read()?.list().into_iter().cloned().collect())
    }

    pub fn count(&self) -> Result<usize, AppError> {
        Ok(self.read()?.count())
    }

    pub fn get(&self, id: BookId) -> Result<Book, AppError> {
        Ok(self.read()?.get(id)?.clone())
    }

    pub fn create(&self, id: BookId, fields: BookFields) -> Result<Book, AppError> {
        Ok(self.write()?.create(id, fields)?.clone())
    }

    pub fn update(&self, id: BookId, fields: BookFields) -> Result<Book, AppError> {
        Ok(self.write()?.update(id, fields)?.clone())
    }

    pub fn delete(&self, id: BookId) -> Result<Book, AppError> {
        Ok(self.write()?.delete(id)?)
    }

    // --- private ---

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, AppError> {
        self.catalog.read().map_err(|_| AppError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, AppError> {
        self.catalog.write().map_err(|_| AppError::LockPoisoned)
    }
}

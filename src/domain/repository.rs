use super::model::catalog::Catalog;

/// Source of the initial catalog. The infra layer implements it.
///
/// `Ok(None)` means no seed exists and the service starts empty.
pub trait CatalogRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<Option<Catalog>, Self::Error>;
}

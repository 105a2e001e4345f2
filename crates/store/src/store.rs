use async_trait::async_trait;
use studyclever_core::error::CoreError;

use crate::models::catalog::Catalog;

/// Durable persistence of the catalog document.
///
/// Both operations move the entire document: `read` loads and parses the
/// whole catalog, `write` serializes and overwrites it. There is no
/// incremental update path, no indexing, and no transaction boundary --
/// callers that need read-modify-write atomicity go through
/// [`crate::CatalogDb`].
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load and parse the full catalog document.
    ///
    /// Fails with [`CoreError::Storage`] if the underlying resource is
    /// missing, unreadable, or not a valid catalog document.
    async fn read(&self) -> Result<Catalog, CoreError>;

    /// Serialize and overwrite the full catalog document.
    ///
    /// Fails with [`CoreError::Storage`] on I/O failure.
    async fn write(&self, catalog: &Catalog) -> Result<(), CoreError>;
}

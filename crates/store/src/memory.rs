//! In-memory backend for the catalog store.
//!
//! The swap-in test double for [`crate::JsonFileStore`]: same contract,
//! no filesystem.

use async_trait::async_trait;
use studyclever_core::error::CoreError;
use tokio::sync::RwLock;

use crate::models::catalog::Catalog;
use crate::store::CatalogStore;

/// Holds the catalog document in memory behind a read/write lock.
#[derive(Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn read(&self) -> Result<Catalog, CoreError> {
        Ok(self.catalog.read().await.clone())
    }

    async fn write(&self, catalog: &Catalog) -> Result<(), CoreError> {
        *self.catalog.write().await = catalog.clone();
        Ok(())
    }
}

//! Guarded access to the catalog store.

use std::sync::Arc;

use studyclever_core::error::CoreError;
use tokio::sync::Mutex;

use crate::models::catalog::Catalog;
use crate::store::CatalogStore;

/// Entry point for all catalog operations.
///
/// The flat file has no transactions, so two concurrent read-modify-write
/// cycles would silently lose the first writer's changes. One async mutex
/// serializes those cycles. Plain reads take no lock; they see whatever
/// document is persisted at that moment.
pub struct CatalogDb {
    store: Arc<dyn CatalogStore>,
    write_guard: Mutex<()>,
}

impl CatalogDb {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// Load the current catalog document.
    pub async fn load(&self) -> Result<Catalog, CoreError> {
        self.store.read().await
    }

    /// Run a read-modify-write cycle under the write guard.
    ///
    /// `mutate` runs against a fresh copy of the document; if it returns
    /// an error, nothing is persisted and the document on disk is
    /// unchanged. The single `write` afterwards is the durability point.
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Catalog) -> Result<T, CoreError>,
    {
        let _guard = self.write_guard.lock().await;
        let mut catalog = self.store.read().await?;
        let out = mutate(&mut catalog)?;
        self.store.write(&catalog).await?;
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

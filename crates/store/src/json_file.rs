//! Flat-file JSON backend for the catalog store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use studyclever_core::error::CoreError;

use crate::models::catalog::Catalog;
use crate::store::CatalogStore;

/// Stores the catalog as one pretty-printed JSON file.
///
/// Every `write` replaces the whole file in place. There is no atomic
/// rename step, so a reader racing a write can observe a partially
/// written document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bootstrap the store file with an empty catalog if it is absent.
    ///
    /// Called once at startup so a fresh deployment starts serving
    /// instead of failing every request. A file that goes missing later
    /// still surfaces as a storage error at request time.
    pub async fn ensure_exists(&self) -> Result<(), CoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.storage_error("stat", &e))?
        {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "Catalog file missing, creating empty catalog");
        self.write(&Catalog::default()).await
    }

    fn storage_error(&self, op: &str, err: &dyn std::fmt::Display) -> CoreError {
        CoreError::Storage(format!("failed to {op} {}: {err}", self.path.display()))
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn read(&self) -> Result<Catalog, CoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.storage_error("read", &e))?;
        serde_json::from_slice(&bytes).map_err(|e| self.storage_error("parse", &e))
    }

    async fn write(&self, catalog: &Catalog) -> Result<(), CoreError> {
        // Two-space indent, matching the document format already on disk.
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| self.storage_error("serialize", &e))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.storage_error("write", &e))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::sync::Arc;

use studyclever_store::CatalogDb;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Guarded access to the catalog store.
    pub db: Arc<CatalogDb>,
    /// Server configuration (CORS origins, strict id mode, timeouts).
    pub config: Arc<ServerConfig>,
}

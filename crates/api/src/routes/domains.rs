//! Route definitions for the `/domains` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::domain;
use crate::state::AppState;

/// Public read routes, mounted at `/api`.
///
/// ```text
/// GET    /domains                  list
/// GET    /domains/{id}             get_by_id
/// GET    /domains/{id}/content     list_content
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/domains", get(domain::list))
        .route("/domains/{id}", get(domain::get_by_id))
        .route("/domains/{id}/content", get(domain::list_content))
}

/// Write routes, mounted at `/api/admin`.
///
/// ```text
/// POST   /domains                  create
/// PUT    /domains/{id}             update
/// DELETE /domains/{id}             delete (cascades to content)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/domains", post(domain::create))
        .route("/domains/{id}", put(domain::update).delete(domain::delete))
}

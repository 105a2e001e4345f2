//! Route definitions for the `/content` resource.
//!
//! Content has no public routes of its own; reads go through
//! `/domains/{id}/content`.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Write routes, mounted at `/api/admin`.
///
/// ```text
/// POST   /content                  create
/// PUT    /content/{id}             update
/// DELETE /content/{id}             delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/content", post(content::create))
        .route("/content/{id}", put(content::update).delete(content::delete))
}

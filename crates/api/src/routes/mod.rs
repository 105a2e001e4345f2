pub mod content;
pub mod domains;
pub mod health;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /domains                     list (public)
/// /domains/{id}                get (public)
/// /domains/{id}/content        list content (public)
///
/// /admin/domains               create
/// /admin/domains/{id}          update, delete (cascades to content)
///
/// /admin/content               create
/// /admin/content/{id}          update, delete
/// ```
///
/// The admin routes carry no authentication; they are "admin" only in
/// the sense that they mutate the catalog.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(domains::public_router())
        .nest("/admin", admin_routes())
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .merge(domains::admin_router())
        .merge(content::admin_router())
}

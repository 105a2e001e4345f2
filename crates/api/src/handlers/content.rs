//! Handlers for the `/content` resource (admin only).

use axum::extract::{Path, State};
use axum::Json;
use studyclever_store::models::Content;
use studyclever_store::repositories::ContentRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/admin/content
///
/// The payload carries the full content shape; the supplied id is
/// discarded and a fresh one assigned. `domain_id` is not checked
/// against existing domains.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<Content>,
) -> AppResult<Json<Content>> {
    let content = ContentRepo::create(&state.db, input).await?;
    Ok(Json(content))
}

/// PUT /api/admin/content/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(record): AppJson<Content>,
) -> AppResult<Json<Content>> {
    let updated =
        ContentRepo::update(&state.db, &id, record, state.config.strict_update_ids).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/content/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    ContentRepo::delete(&state.db, &id).await?;
    Ok(Json(MessageResponse::new("Content deleted successfully")))
}

//! Handlers for the `/domains` resource.

use axum::extract::{Path, State};
use axum::Json;
use studyclever_core::error::CoreError;
use studyclever_store::models::{Content, CreateDomain, Domain};
use studyclever_store::repositories::{ContentRepo, DomainRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/domains
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Domain>>> {
    let domains = DomainRepo::list(&state.db).await?;
    Ok(Json(domains))
}

/// GET /api/domains/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Domain>> {
    let domain = DomainRepo::find_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Domain" }))?;
    Ok(Json(domain))
}

/// GET /api/domains/{id}/content
///
/// No domain-exists check: an unknown id yields an empty list.
pub async fn list_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Content>>> {
    let content = ContentRepo::list_by_domain(&state.db, &id).await?;
    Ok(Json(content))
}

/// POST /api/admin/domains
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDomain>,
) -> AppResult<Json<Domain>> {
    let domain = DomainRepo::create(&state.db, input).await?;
    Ok(Json(domain))
}

/// PUT /api/admin/domains/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(record): AppJson<Domain>,
) -> AppResult<Json<Domain>> {
    let updated =
        DomainRepo::update(&state.db, &id, record, state.config.strict_update_ids).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/domains/{id}
///
/// Cascades: the domain's content items are removed in the same persist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    DomainRepo::delete(&state.db, &id).await?;
    Ok(Json(MessageResponse::new(
        "Domain and associated content deleted successfully",
    )))
}

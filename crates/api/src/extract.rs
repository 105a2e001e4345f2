use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Plain `axum::Json` rejects with its own plain-text responses; routing
/// the rejection through [`AppError`] keeps body-shape failures in the
/// same JSON error format (and status codes) as everything else.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- welcome message.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the StudyClever API"))
}

/// Mount the root route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

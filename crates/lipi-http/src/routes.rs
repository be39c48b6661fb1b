use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{health, transliterate_text};

/// Create the API routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/transliterate", post(transliterate_text))
        .route("/health", get(health))
}

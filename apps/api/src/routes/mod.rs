pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::copywriter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/presets", get(handlers::handle_presets))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/draft",
            patch(handlers::handle_update_draft),
        )
        .route("/api/v1/sessions/:id/submit", post(handlers::handle_submit))
        .route("/api/v1/sessions/:id/retry", post(handlers::handle_retry))
        .route("/api/v1/sessions/:id/reset", post(handlers::handle_reset))
        .route("/api/v1/sessions/:id/share", get(handlers::handle_share))
        .with_state(state)
}

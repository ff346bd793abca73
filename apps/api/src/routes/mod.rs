pub mod health;

use axum::{routing::get, Router};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/roadmaps/:user_id/:goal_id",
            get(handlers::handle_generate),
        )
        .route(
            "/api/v1/roadmaps/:user_id/:goal_id/stored",
            get(handlers::handle_get_stored),
        )
        .with_state(state)
}

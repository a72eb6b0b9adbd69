pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::layout::handlers::handle_layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/career-tree/generate", post(handle_generate))
        .route("/api/v1/career-tree/layout", post(handle_layout))
        .with_state(state)
}

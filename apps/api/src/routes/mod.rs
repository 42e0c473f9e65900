pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimization::handlers;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(ui::handle_index))
        .route("/optimize", post(ui::handle_optimize_form))
        // JSON API
        .route("/api/v1/optimize", post(handlers::handle_optimize))
        .with_state(state)
}

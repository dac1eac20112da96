pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::justify::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/justify", post(handlers::handle_justify))
        .route("/api/usage", get(handlers::handle_usage))
        .with_state(state)
}

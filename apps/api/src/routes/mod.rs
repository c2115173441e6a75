pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::upload::handlers as upload;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(upload::handle_upload))
        .route("/api/generate", post(generation::handle_generate))
        .route("/api/export/text", post(export::handle_export_text))
        .with_state(state)
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::document::handlers::handle_download_docx;
use crate::state::AppState;
use crate::tailoring::handlers::handle_tailor_resume;

/// Upper bound on request bodies (resume uploads and DOCX download payloads).
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/tailor-resume", post(handle_tailor_resume))
        .route("/api/download-docx", post(handle_download_docx))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

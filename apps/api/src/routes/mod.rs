pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/api/v1/skills", get(resume::handle_vocabulary))
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .route("/api/v1/questions", post(resume::handle_questions))
        // Interview scoring
        .route("/api/v1/interview/evaluate", post(interview::handle_evaluate))
        .route("/api/v1/interview/report", post(interview::handle_report))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

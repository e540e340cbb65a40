pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::discovery::handlers as discovery;
use crate::generation::handlers as generation;
use crate::hunt::handlers as hunt;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/parse", post(resume::handle_parse_resume))
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract_resume),
        )
        // Discovery API
        .route("/api/v1/jobs/discover", post(discovery::handle_discover))
        // Generation API
        .route(
            "/api/v1/cover-letter",
            post(generation::handle_cover_letter),
        )
        .route(
            "/api/v1/interview-questions",
            post(generation::handle_interview_questions),
        )
        // Full cycle
        .route("/api/v1/hunt", post(hunt::handle_hunt))
        .with_state(state)
}

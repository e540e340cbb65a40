//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::interview::generate_interview_questions;
use crate::models::job::JobListing;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job: JobListing,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub role: String,
    pub resume_text: String,
    #[serde(default)]
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let cover_letter =
        generate_cover_letter(&request.resume_text, &request.job, state.generator.as_ref()).await;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let questions = generate_interview_questions(
        &request.role,
        &request.resume_text,
        &request.jobs,
        state.generator.as_ref(),
    )
    .await;

    Ok(Json(InterviewQuestionsResponse { questions }))
}

//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::resume::extract::extract_resume_text;
use crate::resume::parser::parse_resume;
use crate::state::AppState;
use crate::upload::{read_upload, UploadForm};

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResumeResponse {
    pub text: String,
}

/// POST /api/v1/resume/parse
///
/// Returns role and skills. Never fails on model trouble: the default
/// profile is returned instead.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    Ok(Json(parse_resume(&request.resume_text, state.generator.as_ref()).await))
}

/// POST /api/v1/resume/extract
///
/// Multipart upload with a `resume` PDF field; returns the extracted text.
pub async fn handle_extract_resume(
    multipart: Multipart,
) -> Result<Json<ExtractResumeResponse>, AppError> {
    let UploadForm { resume, .. } = read_upload(multipart).await?;
    let Some(resume) = resume else {
        return Err(AppError::Validation("Please upload a resume first.".to_string()));
    };

    let text = extract_resume_text(resume.path()).await?;
    Ok(Json(ExtractResumeResponse { text }))
}

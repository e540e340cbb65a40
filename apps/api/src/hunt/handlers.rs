//! Axum route handler for the Hunt API.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::hunt::runner::{run_hunt, HuntContext, HuntOutcome, HuntRequest};
use crate::hunt::session::HuntSession;
use crate::resume::extract::extract_resume_text;
use crate::state::AppState;
use crate::upload::read_upload;

#[derive(Debug, Serialize)]
pub struct HuntReport {
    pub run_id: Uuid,
    pub session: HuntSession,
    pub outcome: HuntOutcome,
}

/// POST /api/v1/hunt
///
/// Multipart form: `resume` (PDF, required), `location`, `role`,
/// `sender_email`, `app_password`. Missing sender credentials fall back to
/// the configured ones. Runs the whole cycle before responding.
pub async fn handle_hunt(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<HuntReport>, AppError> {
    let form = read_upload(multipart).await?;
    let resume = form
        .resume
        .as_ref()
        .ok_or_else(|| AppError::Validation("Please upload a resume first.".to_string()))?;

    let sender_email = form
        .field("sender_email")
        .or_else(|| state.config.sender_email.clone());
    let app_password = form
        .field("app_password")
        .or_else(|| state.config.sender_app_password.clone());
    let (Some(sender_email), Some(app_password)) = (sender_email, app_password) else {
        return Err(AppError::Validation("Please provide all credentials.".to_string()));
    };

    let mut session = HuntSession::default();
    let resume_text = read_resume(resume.path(), &mut session).await?;

    let request = HuntRequest {
        resume_text,
        resume_path: Some(resume.path().to_path_buf()),
        location: form
            .field("location")
            .unwrap_or_else(|| state.config.default_location.clone()),
        manual_role: form.field("role"),
        sender_email,
        app_password,
    };
    let ctx = HuntContext {
        generator: state.generator.as_ref(),
        job_search: &state.job_search,
        mailer: state.mailer.as_ref(),
        rapidapi_key: state.config.rapidapi_key.as_deref(),
        job_delay: state.config.job_delay,
    };

    let run_id = Uuid::new_v4();
    info!(%run_id, location = %request.location, "Starting job hunt");

    let outcome = run_hunt(&ctx, &request, &mut session, &mut StdRng::from_entropy()).await?;

    info!(
        %run_id,
        sent = session.stats.emails_sent,
        skipped = session.stats.skipped,
        "Job hunt finished"
    );

    Ok(Json(HuntReport {
        run_id,
        session,
        outcome,
    }))
}

/// Extracts the uploaded resume's text, logging the step to the session.
async fn read_resume(path: &Path, session: &mut HuntSession) -> Result<String, AppError> {
    session.log("Reading resume...");
    let text = extract_resume_text(path).await?;
    session.log(format!("Read {} characters from resume", text.chars().count()));
    Ok(text)
}

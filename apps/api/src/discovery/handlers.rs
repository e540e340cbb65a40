//! Axum route handlers for the Discovery API.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::discovery::discover_jobs;
use crate::errors::AppError;
use crate::models::job::{DiscoveryMode, JobListing};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiscoverRequest {
    pub role: String,
    /// Defaults to the configured location.
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DiscoverResponse {
    pub jobs: Vec<JobListing>,
    pub mode: DiscoveryMode,
}

/// POST /api/v1/jobs/discover
pub async fn handle_discover(
    State(state): State<AppState>,
    Json(request): Json<DiscoverRequest>,
) -> Result<Json<DiscoverResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    let location = request
        .location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| state.config.default_location.clone());

    let (jobs, mode) = discover_jobs(
        &state.job_search,
        &request.role,
        &location,
        state.config.rapidapi_key.as_deref(),
        &mut StdRng::from_entropy(),
    )
    .await;

    Ok(Json(DiscoverResponse { jobs, mode }))
}

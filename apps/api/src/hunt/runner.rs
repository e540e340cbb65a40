//! Job hunt runner: drives one complete application cycle.
//!
//! Flow: parse resume → discover jobs → per job (cover letter → email →
//!       record result → throttle) → interview questions.
//!
//! Everything is awaited in sequence. External failures degrade to fallbacks
//! and show up in the session log; only missing credentials abort the run.

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::discovery::discover_jobs;
use crate::discovery::jsearch::JobSearchClient;
use crate::errors::AppError;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::interview::generate_interview_questions;
use crate::hunt::session::{ApplicationResult, ApplicationStatus, HuntSession};
use crate::llm_client::TextGenerator;
use crate::mailer::{EmailErrorKind, Mailer, OutgoingEmail};
use crate::models::job::{DiscoveryMode, JobListing};

pub const AUTH_FAILURE_ALERT: &str = "Authentication Failed: Please check your Gmail App \
    Password. It is NOT your regular login password. Ensure 2-Step Verification is ON and \
    generate a specific App Password.";
const MATCH_REASON: &str = "Matched Skills";
const SKILLS_PREVIEW: usize = 3;

/// Collaborators for one run.
pub struct HuntContext<'a> {
    pub generator: &'a dyn TextGenerator,
    pub job_search: &'a JobSearchClient,
    pub mailer: &'a dyn Mailer,
    pub rapidapi_key: Option<&'a str>,
    /// Pause between applications.
    pub job_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct HuntRequest {
    pub resume_text: String,
    /// Attached to every application email.
    pub resume_path: Option<PathBuf>,
    pub location: String,
    /// Overrides the role extracted from the resume when non-blank.
    pub manual_role: Option<String>,
    pub sender_email: String,
    pub app_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetterDraft {
    pub company: String,
    pub recipient: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HuntOutcome {
    pub role: String,
    pub skills: Vec<String>,
    pub mode: DiscoveryMode,
    pub jobs: Vec<JobListing>,
    pub cover_letters: Vec<CoverLetterDraft>,
    pub interview_questions: String,
}

/// Runs one hunt, accumulating progress into `session`.
pub async fn run_hunt<R: Rng + ?Sized>(
    ctx: &HuntContext<'_>,
    request: &HuntRequest,
    session: &mut HuntSession,
    rng: &mut R,
) -> Result<HuntOutcome, AppError> {
    if request.sender_email.trim().is_empty() || request.app_password.trim().is_empty() {
        return Err(AppError::Validation("Please provide all credentials.".to_string()));
    }

    // Step 1: Resume analysis
    session.log("Analyzing resume with Gemini...");
    let parsed = crate::resume::parser::parse_resume(&request.resume_text, ctx.generator).await;
    if let Some(error) = &parsed.error {
        session.log(format!("Resume analysis incomplete: {error}"));
    }

    let role = request
        .manual_role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| parsed.role.clone());
    let skills = parsed.skills;

    session.log(format!("Target Role: {role}"));
    let preview: Vec<&str> = skills
        .iter()
        .take(SKILLS_PREVIEW)
        .map(String::as_str)
        .collect();
    session.log(format!("Skills: {}...", preview.join(", ")));

    // Step 2: Discovery
    session.log(format!("Searching for {role} jobs in {}...", request.location));
    let (jobs, mode) = discover_jobs(
        ctx.job_search,
        &role,
        &request.location,
        ctx.rapidapi_key,
        rng,
    )
    .await;
    session.stats.jobs_found += jobs.len() as u32;
    let source = match mode {
        DiscoveryMode::Real => "live",
        DiscoveryMode::Simulated => "simulated",
    };
    session.log(format!("Found {} {source} listings", jobs.len()));
    if jobs.is_empty() {
        session.log("No jobs found.");
    }

    // Step 3: Apply to each job
    let mut cover_letters = Vec::with_capacity(jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        if i > 0 && !ctx.job_delay.is_zero() {
            tokio::time::sleep(ctx.job_delay).await;
        }

        session.log(format!("Found job at {}. Extracting HR email...", job.company));
        session.log(format!("HR Email found: {}", job.hr_email));

        session.log(format!("Drafting cover letter for {}...", job.company));
        let letter = generate_cover_letter(&request.resume_text, job, ctx.generator).await;

        session.log(format!("Sending application to {}...", job.hr_email));
        let email = OutgoingEmail {
            sender: request.sender_email.clone(),
            app_password: request.app_password.clone(),
            recipient: job.hr_email.clone(),
            subject: format!("Application for {} - {}", job.role, job.company),
            body: letter.clone(),
            attachment: request.resume_path.clone(),
        };

        let status = match ctx.mailer.send(&email).await {
            Ok(()) => {
                session.log(format!("Application Sent to {}", job.company));
                ApplicationStatus::Sent
            }
            Err(e) => {
                session.log(format!("Failed to send to {}: {e}", job.company));
                if e.kind() == EmailErrorKind::Authentication {
                    session.alert(AUTH_FAILURE_ALERT);
                }
                ApplicationStatus::Failed
            }
        };

        session.record(ApplicationResult {
            company: job.company.clone(),
            role: job.role.clone(),
            location: request.location.clone(),
            status,
            reason: MATCH_REASON.to_string(),
        });
        cover_letters.push(CoverLetterDraft {
            company: job.company.clone(),
            recipient: job.hr_email.clone(),
            text: letter,
        });
    }

    // Step 4: Interview prep
    session.log("Generating interview preparation questions...");
    let interview_questions =
        generate_interview_questions(&role, &request.resume_text, &jobs, ctx.generator).await;
    session.log("Job Hunt Cycle Complete!");

    Ok(HuntOutcome {
        role,
        skills,
        mode,
        jobs,
        cover_letters,
        interview_questions,
    })
}

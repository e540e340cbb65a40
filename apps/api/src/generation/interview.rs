//! Interview preparation questions grounded in the jobs applied to.

use std::fmt::Write as _;

use tracing::warn;

use crate::generation::prompts::{
    FALLBACK_MARKER, INTERVIEW_FALLBACK_TEMPLATE, INTERVIEW_JD_BUDGET, INTERVIEW_MAX_JOBS,
    INTERVIEW_PROMPT_TEMPLATE, INTERVIEW_RESUME_BUDGET,
};
use crate::llm_client::prompts::{fill_template, truncate_chars};
use crate::llm_client::TextGenerator;
use crate::models::job::JobListing;

/// Numbered `"{i}. {company} - {role}:\n{jd}"` blocks for the first three jobs.
fn summarize_jobs(role: &str, jobs: &[JobListing]) -> String {
    let mut summaries = String::new();
    for (i, job) in jobs.iter().take(INTERVIEW_MAX_JOBS).enumerate() {
        let company = if job.company.trim().is_empty() {
            "Unknown"
        } else {
            job.company.as_str()
        };
        let _ = write!(
            summaries,
            "\n{}. {} - {}:\n{}\n",
            i + 1,
            company,
            role,
            truncate_chars(&job.job_description, INTERVIEW_JD_BUDGET)
        );
    }
    summaries
}

pub fn build_interview_prompt(role: &str, resume_text: &str, jobs: &[JobListing]) -> String {
    let summaries = summarize_jobs(role, jobs);
    fill_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("job_summaries", summaries.as_str()),
            (
                "resume_text",
                truncate_chars(resume_text, INTERVIEW_RESUME_BUDGET),
            ),
        ],
    )
}

/// Ten standard questions for `role`, tagged with `FALLBACK_MARKER`.
pub fn fallback_interview_questions(role: &str) -> String {
    fill_template(
        INTERVIEW_FALLBACK_TEMPLATE,
        &[("role", role), ("marker", FALLBACK_MARKER)],
    )
}

/// Generates ten questions specific to `jobs` and the resume; falls back to
/// the standard set when generation is exhausted.
pub async fn generate_interview_questions(
    role: &str,
    resume_text: &str,
    jobs: &[JobListing],
    generator: &dyn TextGenerator,
) -> String {
    let prompt = build_interview_prompt(role, resume_text, jobs);

    match generator.generate(&prompt).await {
        Some(questions) => questions,
        None => {
            warn!("Interview questions for {role:?} using fallback template");
            fallback_interview_questions(role)
        }
    }
}

//! Cover letter drafting for a single listing.

use tracing::warn;

use crate::generation::prompts::{
    COVER_LETTER_FALLBACK_TEMPLATE, COVER_LETTER_JD_BUDGET, COVER_LETTER_PROMPT_TEMPLATE,
    COVER_LETTER_RESUME_BUDGET, FALLBACK_MARKER,
};
use crate::llm_client::prompts::{fill_template, truncate_chars};
use crate::llm_client::TextGenerator;
use crate::models::job::JobListing;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Builds the cover letter prompt. The 180-word limit is an instruction only.
pub fn build_cover_letter_prompt(resume_text: &str, job: &JobListing) -> String {
    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("role", or_placeholder(&job.role, "the position")),
            ("company", or_placeholder(&job.company, "the company")),
            (
                "job_description",
                truncate_chars(&job.job_description, COVER_LETTER_JD_BUDGET),
            ),
            (
                "resume_text",
                truncate_chars(resume_text, COVER_LETTER_RESUME_BUDGET),
            ),
        ],
    )
}

/// Static letter naming the role and company, tagged with `FALLBACK_MARKER`.
pub fn fallback_cover_letter(role: &str, company: &str) -> String {
    fill_template(
        COVER_LETTER_FALLBACK_TEMPLATE,
        &[
            ("role", or_placeholder(role, "the position")),
            ("company", or_placeholder(company, "the company")),
            ("marker", FALLBACK_MARKER),
        ],
    )
}

/// Drafts a cover letter for `job`; falls back to the static letter when
/// generation is exhausted.
pub async fn generate_cover_letter(
    resume_text: &str,
    job: &JobListing,
    generator: &dyn TextGenerator,
) -> String {
    let prompt = build_cover_letter_prompt(resume_text, job);

    match generator.generate(&prompt).await {
        Some(letter) => letter,
        None => {
            warn!("Cover letter for {} using fallback template", job.company);
            fallback_cover_letter(&job.role, &job.company)
        }
    }
}

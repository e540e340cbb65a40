//! Resume Parser: extracts the target role and key skills from resume text.
//!
//! Never fails: exhausted generation yields `ParsedResume::fallback()`, and a
//! reply that is not valid JSON yields `ParsedResume::unparsed(..)`.

use tracing::{info, warn};

use crate::llm_client::prompts::{fill_template, truncate_chars, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::resume::ParsedResume;
use crate::resume::prompts::{RESUME_PARSE_BUDGET, RESUME_PARSE_PROMPT_TEMPLATE};

/// Builds the analysis prompt from the first `RESUME_PARSE_BUDGET` characters.
pub fn build_resume_prompt(resume_text: &str) -> String {
    fill_template(
        RESUME_PARSE_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            (
                "resume_text",
                truncate_chars(resume_text, RESUME_PARSE_BUDGET),
            ),
        ],
    )
}

/// Sends the resume to the model and parses its JSON reply.
pub async fn parse_resume(resume_text: &str, generator: &dyn TextGenerator) -> ParsedResume {
    let prompt = build_resume_prompt(resume_text);

    let Some(response) = generator.generate(&prompt).await else {
        warn!("Resume analysis unavailable (rate limit), using default profile");
        return ParsedResume::fallback();
    };

    match serde_json::from_str::<ParsedResume>(strip_json_fences(&response)) {
        Ok(parsed) => {
            info!(
                "Resume analyzed: role={:?}, {} skills",
                parsed.role,
                parsed.skills.len()
            );
            parsed
        }
        Err(e) => {
            warn!("Resume analysis reply was not valid JSON: {e}");
            ParsedResume::unparsed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::RecordingGenerator;
    use crate::models::resume::DEFAULT_ROLE;

    #[tokio::test]
    async fn test_parses_fenced_json_reply() {
        let generator = RecordingGenerator::replying(
            "```json\n{\"role\": \"Data Scientist\", \
             \"skills\": [\"Python\", \"SQL\", \"Pandas\"]}\n```",
        );
        let parsed = parse_resume("Data scientist with 4 years of ML work", &generator).await;

        assert_eq!(parsed.role, "Data Scientist");
        assert_eq!(parsed.skills, vec!["Python", "SQL", "Pandas"]);
        assert!(parsed.error.is_none());
    }

    #[tokio::test]
    async fn test_exhausted_generation_returns_default_profile() {
        let generator = RecordingGenerator::exhausted();
        let parsed = parse_resume("anything", &generator).await;

        assert_eq!(parsed, ParsedResume::fallback());
        assert_eq!(parsed.role, DEFAULT_ROLE);
        assert_eq!(parsed.skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_invalid_json_returns_annotated_default() {
        let generator = RecordingGenerator::replying("Error: API error (status 400): bad key");
        let parsed = parse_resume("anything", &generator).await;

        assert_eq!(parsed.role, DEFAULT_ROLE);
        assert!(parsed.skills.is_empty());
        assert!(parsed.error.is_some());
    }

    #[tokio::test]
    async fn test_empty_resume_still_yields_record() {
        let generator = RecordingGenerator::replying("not json at all");
        let parsed = parse_resume("", &generator).await;

        assert!(!parsed.role.is_empty());
        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json.get("role").is_some());
        assert!(json.get("skills").is_some());
    }

    #[tokio::test]
    async fn test_long_resume_is_truncated_in_prompt() {
        let generator = RecordingGenerator::exhausted();
        let resume = "x".repeat(5_000);
        parse_resume(&resume, &generator).await;

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        let template_len = build_resume_prompt("").chars().count();
        assert_eq!(
            prompts[0].chars().count(),
            template_len + RESUME_PARSE_BUDGET
        );
        assert!(!prompts[0].contains(&"x".repeat(RESUME_PARSE_BUDGET + 1)));
    }
}

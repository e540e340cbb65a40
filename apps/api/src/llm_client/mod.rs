//! LLM Client: the single point of entry for all Gemini calls in the assistant.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All text generation goes through the `TextGenerator` trait defined here.
//!
//! Failure policy: callers never see an error. A rate-limited call is retried
//! with exponential backoff and yields `None` once attempts are exhausted, which
//! tells the caller to use its static fallback template. Any other failure
//! yields `Some("Error: ...")` so a multi-job run keeps going.
//!
//! Model: gemini-2.0-flash-lite (hardcoded)

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
#[cfg(test)]
pub mod testing;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash-lite";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited (status {status}): {message}")]
    RateLimited { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyContent,
}

impl LlmError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Retry policy
// ────────────────────────────────────────────────────────────────────────────

/// Bounded exponential backoff applied to rate-limited calls only.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delay after the failed 0-based `attempt`: base, 2×base, 4×base, ...
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Runs `attempt_fn` under `policy`.
///
/// - `Ok(text)` → `Some(text)`
/// - rate limit → sleep and retry; `None` after the last attempt
/// - anything else → `Some("Error: ...")`, no retry
pub async fn generate_with_retry<F, Fut>(policy: &RetryPolicy, mut attempt_fn: F) -> Option<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, LlmError>>,
{
    for attempt in 0..policy.max_attempts {
        match attempt_fn().await {
            Ok(text) => return Some(text),
            Err(e) if e.is_rate_limit() => {
                if attempt + 1 < policy.max_attempts {
                    let delay = policy.delay_for(attempt);
                    warn!(
                        "Rate limit hit on attempt {}/{}, retrying in {}s...",
                        attempt + 1,
                        policy.max_attempts,
                        delay.as_secs()
                    );
                    tokio::time::sleep(delay).await;
                } else {
                    warn!(
                        "Rate limit persisted after {} attempts, falling back",
                        policy.max_attempts
                    );
                }
            }
            Err(e) => {
                warn!("Text generation failed: {e}");
                return Some(format!("Error: {e}"));
            }
        }
    }

    None
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can turn a prompt into text under the fallback policy above.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// `None` means retries were exhausted and the caller must use a fallback.
    async fn generate(&self, prompt: &str) -> Option<String>;
}

/// Gemini `generateContent` client with retry on rate limits.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    policy: RetryPolicy,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, GEMINI_API_BASE)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: base_url.into(),
            policy: RetryPolicy::default(),
        })
    }

    /// One request, no retry. Classifies the failure for `generate_with_retry`.
    async fn call_once(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/v1beta/models/{MODEL}:generateContent", self.base_url);
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let rate_limited = is_rate_limit_response(status.as_u16(), &body);
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            return Err(if rate_limited {
                LlmError::RateLimited {
                    status: status.as_u16(),
                    message,
                }
            } else {
                LlmError::Api {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Option<String> {
        generate_with_retry(&self.policy, || self.call_once(prompt)).await
    }
}

/// Quota errors come back as 429, but Gemini also reports them in the body.
fn is_rate_limit_response(status: u16, body: &str) -> bool {
    status == 429 || body.contains("RESOURCE_EXHAUSTED") || body.contains("Quota exceeded")
}

/// Extracts the payload from ```json ... ``` or ``` ... ``` fences in model output.
/// Prose around the fence is dropped; unfenced text is returned trimmed.
pub(crate) fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(start) = text.find("```") else {
        return text;
    };
    let after_fence = &text[start + 3..];
    let body = after_fence.strip_prefix("json").unwrap_or(after_fence);
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::discovery::jsearch::JobSearchClient;
use crate::llm_client::TextGenerator;
use crate::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; swapped for a fake in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub job_search: JobSearchClient,
    pub mailer: Arc<dyn Mailer>,
    pub config: Config,
}

mod config;
mod discovery;
mod errors;
mod generation;
mod hunt;
mod llm_client;
mod mailer;
mod models;
mod resume;
mod routes;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::discovery::jsearch::JobSearchClient;
use crate::llm_client::GeminiClient;
use crate::mailer::SmtpMailer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Hunt API v{}", env!("CARGO_PKG_VERSION"));

    let generator = GeminiClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let job_search = JobSearchClient::new()?;
    if config.rapidapi_key.is_none() {
        info!("RAPIDAPI_KEY not set; job discovery will use simulated listings");
    }

    let mailer = SmtpMailer::new(config.smtp_host.clone(), config.smtp_port);
    info!("SMTP relay: {}:{}", config.smtp_host, config.smtp_port);

    let state = AppState {
        generator: Arc::new(generator),
        job_search,
        mailer: Arc::new(mailer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once a frontend ships

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

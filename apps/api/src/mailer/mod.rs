//! Application email delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport to send a plain-text
//! cover letter with the resume attached. Failures carry an [`EmailErrorKind`]
//! so callers can react to bad credentials without inspecting message text.

use std::path::PathBuf;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// SMTP reply codes that mean the server rejected the login.
const AUTH_FAILURE_CODES: [&str; 2] = ["534", "535"];

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum EmailError {
    /// The server rejected the sender's username or app password.
    #[error("SMTP authentication failed: {0}")]
    Authentication(String),

    /// Connection, TLS or protocol failure other than authentication.
    #[error("SMTP transport error: {0}")]
    Transport(#[source] lettre::transport::smtp::Error),

    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),

    #[error("Email build error: {0}")]
    Build(String),
}

/// Coarse classification of [`EmailError`] for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailErrorKind {
    Authentication,
    Transport,
    Address,
    Attachment,
    Build,
}

impl EmailError {
    pub fn kind(&self) -> EmailErrorKind {
        match self {
            EmailError::Authentication(_) => EmailErrorKind::Authentication,
            EmailError::Transport(_) => EmailErrorKind::Transport,
            EmailError::Address(_) => EmailErrorKind::Address,
            EmailError::Attachment(_) => EmailErrorKind::Attachment,
            EmailError::Build(_) => EmailErrorKind::Build,
        }
    }
}

impl From<lettre::transport::smtp::Error> for EmailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        let rejected_login = err
            .status()
            .is_some_and(|code| AUTH_FAILURE_CODES.contains(&code.to_string().as_str()));
        if rejected_login {
            EmailError::Authentication(err.to_string())
        } else {
            EmailError::Transport(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// One outgoing application email.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub sender: String,
    pub app_password: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Attached as `application/pdf` under its file name.
    pub attachment: Option<PathBuf>,
}

/// Carried in `AppState` as `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// STARTTLS SMTP relay, authenticated per message with the sender's app password.
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let message = build_message(email).await?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(
                email.sender.clone(),
                email.app_password.clone(),
            ))
            .build();

        mailer.send(message).await?;

        info!(to = %email.recipient, subject = %email.subject, "Application email sent");
        Ok(())
    }
}

/// Assembles the MIME message, reading the attachment from disk if present.
pub async fn build_message(email: &OutgoingEmail) -> Result<Message, EmailError> {
    let from: Mailbox = email.sender.parse()?;
    let to: Mailbox = email.recipient.parse()?;
    let builder = Message::builder().from(from).to(to).subject(&email.subject);

    let Some(path) = &email.attachment else {
        return builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| EmailError::Build(e.to_string()));
    };

    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());
    let pdf = ContentType::parse("application/pdf")
        .map_err(|e| EmailError::Build(e.to_string()))?;

    builder
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(email.body.clone()))
                .singlepart(Attachment::new(filename).body(bytes, pdf)),
        )
        .map_err(|e| EmailError::Build(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_LOCATION: &str = "Ahmedabad";
/// Pause between applications; keeps both Gemini and Gmail under their rate limits.
const DEFAULT_JOB_DELAY_SECS: u64 = 20;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing. No credential has a
/// built-in default.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Absent → discovery always simulates.
    pub rapidapi_key: Option<String>,
    /// Sender credentials may instead be supplied per hunt request.
    pub sender_email: Option<String>,
    pub sender_app_password: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub default_location: String,
    pub job_delay: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            sender_email: optional_env("SENDER_EMAIL"),
            sender_app_password: optional_env("SENDER_APP_PASSWORD"),
            smtp_host: optional_env("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parse_env("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            default_location: optional_env("DEFAULT_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            job_delay: Duration::from_secs(parse_env("JOB_DELAY_SECS", DEFAULT_JOB_DELAY_SECS)?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        std::env::remove_var("JOBHUNT_TEST_UNSET_PORT");
        assert_eq!(parse_env("JOBHUNT_TEST_UNSET_PORT", 8080u16).unwrap(), 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("JOBHUNT_TEST_BAD_DELAY", "soon");
        assert!(parse_env::<u64>("JOBHUNT_TEST_BAD_DELAY", 20).is_err());
        std::env::remove_var("JOBHUNT_TEST_BAD_DELAY");
    }

    #[test]
    fn test_blank_optional_is_absent() {
        std::env::set_var("JOBHUNT_TEST_BLANK_KEY", "   ");
        assert!(optional_env("JOBHUNT_TEST_BLANK_KEY").is_none());
        std::env::remove_var("JOBHUNT_TEST_BLANK_KEY");
    }
}

//! Per-run accumulator: live log, counters and the results table.

use chrono::Local;
use serde::Serialize;
use tracing::info;

/// Log lines kept; older lines are dropped first.
pub const MAX_LOG_LINES: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HuntStats {
    pub jobs_found: u32,
    pub emails_sent: u32,
    pub skipped: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApplicationStatus {
    Sent,
    Failed,
}

/// One row of the results table.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResult {
    pub company: String,
    pub role: String,
    pub location: String,
    pub status: ApplicationStatus,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HuntSession {
    pub stats: HuntStats,
    pub logs: Vec<String>,
    pub results: Vec<ApplicationResult>,
    /// User-facing problems needing action, e.g. a rejected app password.
    pub alerts: Vec<String>,
}

impl HuntSession {
    /// Appends a `[HH:MM:SS] message` line and mirrors it to the tracing log.
    pub fn log(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        info!("{message}");

        let timestamp = Local::now().format("%H:%M:%S");
        self.logs.push(format!("[{timestamp}] {message}"));
        if self.logs.len() > MAX_LOG_LINES {
            let excess = self.logs.len() - MAX_LOG_LINES;
            self.logs.drain(..excess);
        }
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.alerts.contains(&message) {
            self.alerts.push(message);
        }
    }

    pub fn record(&mut self, result: ApplicationResult) {
        match result.status {
            ApplicationStatus::Sent => self.stats.emails_sent += 1,
            ApplicationStatus::Failed => self.stats.skipped += 1,
        }
        self.results.push(result);
    }
}

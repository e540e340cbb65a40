// Job hunt orchestration: resume → discovery → cover letters → emails → interview prep.
// The run's visible state (logs, counters, results) lives in an explicit
// `HuntSession` owned by the caller.

pub mod handlers;
pub mod runner;
pub mod session;

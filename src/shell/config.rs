// Process configuration, read from the environment.
//
// Responsibilities
// - Keep the shell's knobs out of the pipeline code. Stores and sources are
//   injected as handles; only timing lives here.

use std::time::Duration;

const STAGE_TIMEOUT_VAR: &str = "SCHEDULE_SYNC_STAGE_TIMEOUT_MS";
const DEFAULT_STAGE_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtlConfig {
    pub stage_timeout: Duration,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            stage_timeout: Duration::from_millis(DEFAULT_STAGE_TIMEOUT_MS),
        }
    }
}

impl EtlConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(STAGE_TIMEOUT_VAR).ok())
    }

    fn from_var(raw: Option<String>) -> Self {
        let stage_timeout_ms = match raw.as_deref().map(str::parse::<u64>) {
            Some(Ok(ms)) => ms,
            Some(Err(_)) => {
                tracing::warn!(
                    var = STAGE_TIMEOUT_VAR,
                    "unparseable stage timeout, using default"
                );
                DEFAULT_STAGE_TIMEOUT_MS
            }
            None => DEFAULT_STAGE_TIMEOUT_MS,
        };
        Self {
            stage_timeout: Duration::from_millis(stage_timeout_ms),
        }
    }
}

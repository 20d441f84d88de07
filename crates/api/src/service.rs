//! Process-level service information shared by the metadata and health
//! endpoints.

use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::Config;

/// Greeting returned by `GET /`.
pub const GREETING: &str = "Hello from DevOps Demo!";

/// Service version reported by `GET /`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable facts about the running service, captured once at startup.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    environment: String,
    started_at: Instant,
}

impl ServiceInfo {
    /// Captures the start instant now.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.clone())
    }

    /// Measures uptime from `started_at` instead of construction time.
    pub fn started_at(mut self, started_at: Instant) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Time elapsed since startup, from a monotonic clock.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Formats a UTC instant as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2026-10-15T08:30:00.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

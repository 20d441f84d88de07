//! Application configuration loaded from environment variables.

use user_store::{DEFAULT_LAST_JOINED_LIMIT, MAX_LAST_JOINED_LIMIT};

/// Environment label reported when neither `APP_ENV` nor `NODE_ENV` is set.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `APP_ENV`, then `NODE_ENV` — environment label (default: `"production"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATABASE_URL` — PostgreSQL connection string (unset: in-memory users)
/// - `LAST_JOINED_LIMIT` — size of the newcomers listing (default: `10`,
///   clamped to `1000`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub database_url: Option<String>,
    pub last_joined_limit: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            environment: get("APP_ENV")
                .or_else(|| get("NODE_ENV"))
                .unwrap_or(defaults.environment),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: get("DATABASE_URL"),
            last_joined_limit: get("LAST_JOINED_LIMIT")
                .and_then(|n| n.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .map(|n| n.min(MAX_LAST_JOINED_LIMIT))
                .unwrap_or(defaults.last_joined_limit),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_level: "info".to_string(),
            database_url: None,
            last_joined_limit: DEFAULT_LAST_JOINED_LIMIT,
        }
    }
}

//! # Configuration
//!
//! Environment-driven configuration for the echoline client.
//! Values are read once at startup; a `.env` file is honored when the
//! binary loads it via dotenvy before calling [`Config::from_env`].

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default backend base URL (local EchoVerse development server)
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Default log filter when ECHOLINE_LOG_LEVEL is unset
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default per-request HTTP timeout in seconds
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the assistant backend, without trailing slash
    pub api_url: String,
    /// Log filter passed to env_logger
    pub log_level: String,
    /// Timeout applied to every HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Build a Config from environment variables, applying defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("ECHOLINE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level =
            env::var("ECHOLINE_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let timeout_secs = match env::var("ECHOLINE_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("ECHOLINE_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Config {
            api_url,
            log_level,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

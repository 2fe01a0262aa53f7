//! Client configuration loaded from environment variables.
//!
//! The following variables are read:
//!
//! - `CITAFLOW_API_URL`: base URL of the booking backend (required)
//! - `CITAFLOW_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. "http://localhost:3001".
    pub base_url: String,

    /// Request timeout in seconds.
    pub request_timeout: u64,

    /// Log level for the application.
    pub log_level: Level,
}

impl ClientConfig {
    /// Loads configuration from environment variables, applying defaults
    /// where possible. `CITAFLOW_API_URL` is required.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("CITAFLOW_API_URL")
            .wrap_err("CITAFLOW_API_URL environment variable must be set")?;

        let request_timeout = env::var("CITAFLOW_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid CITAFLOW_TIMEOUT_SECONDS value")?;

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            base_url,
            request_timeout,
            log_level,
        })
    }
}

//! # Citaflow Client
//!
//! Typed REST layer over the booking backend. It owns the shared
//! `reqwest::Client`, attaches the bearer token from the session store to
//! every request, and maps HTTP failures onto the core error taxonomy,
//! including the global rule that any 401 clears the stored session.
//!
//! Endpoint modules mirror the consumed API surface one function per
//! operation; they never hold state beyond the last response they return.

pub mod auth;
pub mod config;
pub mod endpoints;
mod http;

use std::sync::Arc;
use std::time::Duration;

use citaflow_core::errors::{BookingError, BookingResult};
use eyre::Report;

use crate::auth::AuthStore;
use crate::config::ClientConfig;

/// Shared HTTP client for the booking backend.
///
/// Cheap to clone via the inner `reqwest::Client`; all endpoint methods in
/// [`endpoints`] are implemented on this type.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<AuthStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, auth: Arc<AuthStore>) -> BookingResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|err| BookingError::Network(Report::new(err)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// The session store this client attaches tokens from.
    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

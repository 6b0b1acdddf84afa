//! API client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "PARKDECK_API_URL";

/// Base URL used when `PARKDECK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Fixed timeout applied to every outbound request. No retry, no backoff.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for [`crate::net::Api`].
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined onto, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the base URL from `PARKDECK_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
            tracing::info!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_owned()
        });
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

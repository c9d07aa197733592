//! Client configuration.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the skip service lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default timeout against a different upstream, e.g. the mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

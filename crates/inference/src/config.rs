//! Configuration types for the inference library

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::BackendError;

/// Configuration for creating a backend
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// API key for hosted services (Gemini requires one)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override for the service base URL
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds. Unset means the request may run
    /// until the service answers or the transport fails.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Base URL from config, or the given default, without a trailing slash
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }

    /// API key if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Build the HTTP client shared by every request of one backend
    pub fn http_client(&self) -> Result<reqwest::Client, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().map_err(BackendError::Http)
    }
}

// Keeps the key out of log output.
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

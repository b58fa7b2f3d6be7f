//! Pluggable generation backend abstraction
//!
//! This module provides a trait-based abstraction over the services that
//! generate text (Gemini, OpenAI-compatible servers). All backends implement
//! the same interface, so callers can switch services through configuration.

pub mod registry;

#[cfg(feature = "backend-gemini")]
pub mod gemini;

#[cfg(feature = "backend-openai")]
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::InferenceRequest;

#[cfg(feature = "backend-gemini")]
pub use gemini::GeminiBackend;

#[cfg(feature = "backend-openai")]
pub use openai::OpenAiCompatBackend;

pub use registry::{BackendFactory, BackendRegistry};

/// Error types for backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend not configured: {0}")]
    NotConfigured(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Capabilities that a backend may or may not support
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendCapabilities {
    /// Accepts inline images alongside the text prompt
    pub vision: bool,
    /// Refuses requests without an API key
    pub requires_api_key: bool,
}

/// Backend information for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend identifier (e.g., "Gemini")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Backend capabilities
    pub capabilities: BackendCapabilities,
}

/// The core trait that all generation backends implement.
///
/// A call issues exactly one request and returns the generated text, or
/// `None` when the service answered without any text. Failures are returned
/// as-is; backends never retry.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    // ─── IDENTITY ───────────────────────────────────────────────────

    /// Human-readable name for display
    fn name(&self) -> &'static str;

    /// What this backend supports
    fn capabilities(&self) -> BackendCapabilities;

    // ─── GENERATION ─────────────────────────────────────────────────

    /// Generate text for a single request
    async fn generate(&self, request: &InferenceRequest) -> Result<Option<String>, BackendError>;
}

/// Read a response, turning non-success statuses into `BackendError::Api`
pub(crate) async fn read_json<T>(response: reqwest::Response) -> Result<T, BackendError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Api {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

//! Text-generation backends for App Forge
//!
//! This library provides a unified interface for the services that turn an
//! instruction into generated text:
//! - **Gemini**: Google's hosted `generateContent` API (default)
//! - **OpenAI-compatible**: any `/v1/chat/completions` server, including
//!   local llama.cpp and Ollama instances
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_inference::{BackendConfig, BackendRegistry, ContentPart, InferenceRequest};
//!
//! let registry = BackendRegistry::new();
//! let config = BackendConfig {
//!     api_key: std::env::var("API_KEY").ok(),
//!     ..Default::default()
//! };
//! let backend = registry.create("Gemini", &config)?;
//!
//! let request = InferenceRequest::new("Describe a calm meditation app")
//!     .with_system_instruction("You are a product designer.");
//! let text = backend.generate(&request).await?;
//! ```

pub mod backend;
pub mod config;
pub mod constants;
pub mod types;

// Re-exports for convenience
pub use backend::{
    BackendCapabilities, BackendError, BackendFactory, BackendInfo, BackendRegistry,
    GenerationBackend,
};

#[cfg(feature = "backend-gemini")]
pub use backend::GeminiBackend;

#[cfg(feature = "backend-openai")]
pub use backend::OpenAiCompatBackend;

pub use config::BackendConfig;
pub use types::{ContentPart, InferenceRequest, InlineData};

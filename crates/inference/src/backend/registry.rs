//! Backend registry for runtime backend discovery and instantiation
//!
//! The registry manages available backends and provides factory methods
//! to create backend instances. Backends are registered at compile time
//! via feature flags.

use std::collections::BTreeMap;

use super::{BackendError, BackendInfo, GenerationBackend};
use crate::config::BackendConfig;
use crate::constants::backends;

#[cfg(feature = "backend-gemini")]
use super::GeminiBackend;

#[cfg(feature = "backend-openai")]
use super::OpenAiCompatBackend;

/// Factory trait for creating backend instances
pub trait BackendFactory: Send + Sync {
    /// Create a new backend instance
    fn create(&self, config: &BackendConfig) -> Result<Box<dyn GenerationBackend>, BackendError>;

    /// Get information about this backend
    fn info(&self) -> BackendInfo;
}

/// Factory for the Gemini backend
#[cfg(feature = "backend-gemini")]
pub struct GeminiFactory;

#[cfg(feature = "backend-gemini")]
impl BackendFactory for GeminiFactory {
    fn create(&self, config: &BackendConfig) -> Result<Box<dyn GenerationBackend>, BackendError> {
        Ok(Box::new(GeminiBackend::new(config)?))
    }

    fn info(&self) -> BackendInfo {
        BackendInfo {
            name: backends::GEMINI.to_string(),
            description: "Google Gemini generateContent API (hosted, API key required)"
                .to_string(),
            capabilities: GeminiBackend::static_capabilities(),
        }
    }
}

/// Factory for the OpenAI-compatible backend
#[cfg(feature = "backend-openai")]
pub struct OpenAiCompatFactory;

#[cfg(feature = "backend-openai")]
impl BackendFactory for OpenAiCompatFactory {
    fn create(&self, config: &BackendConfig) -> Result<Box<dyn GenerationBackend>, BackendError> {
        Ok(Box::new(OpenAiCompatBackend::new(config)?))
    }

    fn info(&self) -> BackendInfo {
        BackendInfo {
            name: backends::OPENAI_COMPAT.to_string(),
            description: "Any /v1/chat/completions server (llama.cpp, Ollama, LM Studio)"
                .to_string(),
            capabilities: OpenAiCompatBackend::static_capabilities(),
        }
    }
}

/// Registry of available generation backends
///
/// Names are matched case-insensitively.
pub struct BackendRegistry {
    factories: BTreeMap<String, Box<dyn BackendFactory>>,
}

impl BackendRegistry {
    /// Create a new registry with all available backends registered
    pub fn new() -> Self {
        let mut registry = Self {
            factories: BTreeMap::new(),
        };

        #[cfg(feature = "backend-gemini")]
        registry.register(backends::GEMINI, Box::new(GeminiFactory));

        #[cfg(feature = "backend-openai")]
        registry.register(backends::OPENAI_COMPAT, Box::new(OpenAiCompatFactory));

        registry
    }

    /// Register a backend factory
    pub fn register(&mut self, name: &str, factory: Box<dyn BackendFactory>) {
        self.factories.insert(name.to_ascii_lowercase(), factory);
    }

    /// Get information about all registered backends
    pub fn list(&self) -> Vec<BackendInfo> {
        self.factories.values().map(|f| f.info()).collect()
    }

    /// Create a backend instance by name
    pub fn create(
        &self,
        name: &str,
        config: &BackendConfig,
    ) -> Result<Box<dyn GenerationBackend>, BackendError> {
        self.factories
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| BackendError::Config(format!("Unknown backend: {}", name)))?
            .create(config)
    }

    /// Check if a backend is registered
    pub fn is_available(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_lowercase())
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

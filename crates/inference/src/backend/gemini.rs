//! Gemini backend implementation
//!
//! Talks to Google's hosted `generateContent` endpoint. The system
//! instruction travels separately from the user content, and inline images
//! are sent as `inlineData` parts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{read_json, BackendCapabilities, BackendError, GenerationBackend};
use crate::config::BackendConfig;
use crate::constants::{backends, endpoints};
use crate::types::{ContentPart, InferenceRequest};

/// Gemini content container
#[derive(Debug, Clone, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: WireInlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

/// Top-level `generateContent` request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

/// Top-level `generateContent` response envelope
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// Response parts may carry function calls or thought summaries; only text matters here.
#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentRequest {
    fn from_request(request: &InferenceRequest) -> Self {
        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::Text { text } => Part::Text { text: text.clone() },
                ContentPart::InlineData(data) => Part::InlineData {
                    inline_data: WireInlineData {
                        mime_type: data.mime_type.clone(),
                        data: data.data.clone(),
                    },
                },
            })
            .collect();

        let system_instruction = if request.system_instruction.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_instruction.clone(),
                }],
            })
        };

        Self {
            system_instruction,
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, skipping thought parts
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini backend using the hosted `generateContent` API
pub struct GeminiBackend {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    /// Base URL of the API (no trailing slash)
    base_url: String,
    /// API key sent as `x-goog-api-key`
    api_key: Option<String>,
}

impl GeminiBackend {
    /// Create a new Gemini backend from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        Ok(Self {
            http_client: config.http_client()?,
            base_url: config.base_url_or(endpoints::GEMINI_BASE_URL),
            api_key: config.api_key().map(str::to_string),
        })
    }

    /// Get static capabilities (for registry info before instantiation)
    pub fn static_capabilities() -> BackendCapabilities {
        BackendCapabilities {
            vision: true,
            requires_api_key: true,
        }
    }

    /// Full URL of the `generateContent` method for a model
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url,
            endpoints::GEMINI_API_VERSION,
            model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        backends::GEMINI
    }

    fn capabilities(&self) -> BackendCapabilities {
        Self::static_capabilities()
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<Option<String>, BackendError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            BackendError::NotConfigured("Gemini requires an API key".to_string())
        })?;

        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from_request(request);

        log::debug!(
            "Gemini request: model={}, parts={}, temperature={}",
            request.model,
            request.parts.len(),
            request.temperature
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(BackendError::Http)?;

        let parsed: GenerateContentResponse = read_json(response).await?;
        Ok(parsed.text())
    }
}

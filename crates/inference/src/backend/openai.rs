//! OpenAI-compatible backend implementation
//!
//! Works with any server exposing `/v1/chat/completions`: llama.cpp's
//! server, Ollama, LM Studio or hosted OpenAI-style APIs. Inline images are
//! sent as `data:` URLs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{read_json, BackendCapabilities, BackendError, GenerationBackend};
use crate::config::BackendConfig;
use crate::constants::{backends, endpoints};
use crate::types::{ContentPart, InferenceRequest};

/// Chat message with multimodal content support
#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ChatContent>,
}

/// Content part - text or image
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrlData },
}

#[derive(Debug, Clone, Serialize)]
struct ImageUrlData {
    url: String,
}

/// Chat completion request (non-streaming)
#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatRequest {
    fn from_request(request: &InferenceRequest) -> Self {
        let mut messages = Vec::with_capacity(2);

        if !request.system_instruction.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: vec![ChatContent::Text {
                    text: request.system_instruction.clone(),
                }],
            });
        }

        let content = request
            .parts
            .iter()
            .map(|part| match part {
                ContentPart::Text { text } => ChatContent::Text { text: text.clone() },
                ContentPart::InlineData(data) => ChatContent::ImageUrl {
                    image_url: ImageUrlData {
                        url: data.to_data_url(),
                    },
                },
            })
            .collect();

        messages.push(ChatMessage {
            role: "user".to_string(),
            content,
        });

        Self {
            model: request.model.clone(),
            messages,
            stream: false,
            temperature: request.temperature,
        }
    }
}

impl ChatResponse {
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
    }
}

/// Backend for OpenAI-compatible chat completion servers
pub struct OpenAiCompatBackend {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    /// Base URL of the server (no trailing slash)
    base_url: String,
    /// Optional bearer token
    api_key: Option<String>,
}

impl OpenAiCompatBackend {
    /// Create a new backend from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        Ok(Self {
            http_client: config.http_client()?,
            base_url: config.base_url_or(endpoints::OPENAI_COMPAT_BASE_URL),
            api_key: config.api_key().map(str::to_string),
        })
    }

    /// Get static capabilities (for registry info before instantiation)
    pub fn static_capabilities() -> BackendCapabilities {
        BackendCapabilities {
            vision: true,             // Depends on the loaded model (mmproj, llava)
            requires_api_key: false,  // Local servers accept anonymous requests
        }
    }

    /// Full URL of the chat completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl GenerationBackend for OpenAiCompatBackend {
    fn name(&self) -> &'static str {
        backends::OPENAI_COMPAT
    }

    fn capabilities(&self) -> BackendCapabilities {
        Self::static_capabilities()
    }

    async fn generate(&self, request: &InferenceRequest) -> Result<Option<String>, BackendError> {
        let url = self.endpoint();
        let body = ChatRequest::from_request(request);

        log::debug!(
            "Chat completion request to {}: model={}, parts={}",
            url,
            request.model,
            request.parts.len()
        );

        let mut builder = self.http_client.post(&url).json(&body);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(BackendError::Http)?;
        let parsed: ChatResponse = read_json(response).await?;
        Ok(parsed.text())
    }
}

//! Common types for generation requests

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Base64 payload sent inline with a request (reference images)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    /// Base64-encoded bytes
    pub data: String,
    /// MIME type of the decoded bytes (e.g., "image/png")
    pub mime_type: String,
}

impl InlineData {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// `data:` URL form used by OpenAI-compatible servers
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Content part - text or inline binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    InlineData(InlineData),
}

/// A single backend-neutral generation request.
///
/// One request produces one text response. Backends translate this into
/// their own wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Model identifier understood by the backend
    pub model: String,
    /// Fixed instruction sent separately from the user content
    pub system_instruction: String,
    /// User content, in order
    pub parts: Vec<ContentPart>,
    /// Sampling temperature
    pub temperature: f32,
}

impl InferenceRequest {
    /// Request with a single text part and default model settings
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            model: defaults::GEMINI_MODEL.to_string(),
            system_instruction: String::new(),
            parts: vec![ContentPart::Text { text: text.into() }],
            temperature: defaults::TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Append an inline binary part after the existing parts
    pub fn with_inline_data(mut self, data: InlineData) -> Self {
        self.parts.push(ContentPart::InlineData(data));
        self
    }

    /// Whether any part carries binary data
    pub fn has_inline_data(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, ContentPart::InlineData(_)))
    }
}

//! Request and result types for design generation

use serde::{Deserialize, Serialize};

/// Reference image attached to an idea (base64 data plus MIME type)
pub use forge_inference::InlineData as Attachment;

/// A single user submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text app idea, used verbatim
    pub idea: String,
    /// Optional reference image sent alongside the instruction
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl GenerationRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            attachment: None,
        }
    }

    /// Attach a reference image.
    ///
    /// The attachment is kept only when both the data and the MIME type are
    /// non-empty; otherwise the request goes out as text only.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        if attachment.data.is_empty() || attachment.mime_type.trim().is_empty() {
            log::debug!(
                "Dropping attachment: {} bytes of data, mime type {:?}",
                attachment.data.len(),
                attachment.mime_type
            );
            self.attachment = None;
        } else {
            self.attachment = Some(attachment);
        }
        self
    }

    /// Build from loosely-typed caller input, applying the same rule as
    /// [`with_attachment`](Self::with_attachment).
    pub fn from_parts(idea: &str, file_base64: Option<&str>, mime_type: Option<&str>) -> Self {
        let request = Self::new(idea);
        match (file_base64, mime_type) {
            (Some(data), Some(mime)) => request.with_attachment(Attachment::new(data, mime)),
            _ => request,
        }
    }
}

/// Sanitized HTML artifact returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub html: String,
}

impl GenerationResult {
    pub fn into_html(self) -> String {
        self.html
    }
}

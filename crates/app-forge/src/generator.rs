//! Design generator - the single entry point for turning ideas into HTML
//!
//! Every call runs classify → build instruction → one backend request →
//! sanitize. Nothing is cached or shared between calls, so one generator
//! can serve any number of concurrent submissions.

use std::sync::Arc;

use forge_inference::constants::defaults;
use forge_inference::{GenerationBackend, InferenceRequest};
use uuid::Uuid;

use crate::category::{classify, CategoryProfile};
use crate::error::{GenerationError, Result};
use crate::instruction::build_instruction;
use crate::prompt::SYSTEM_INSTRUCTION;
use crate::sanitize::sanitize;
use crate::types::{GenerationRequest, GenerationResult};

/// Model settings applied to every request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Model identifier passed to the backend
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: defaults::GEMINI_MODEL.to_string(),
            temperature: defaults::TEMPERATURE,
        }
    }
}

/// Turns app ideas into sanitized HTML design systems.
pub struct DesignGenerator {
    backend: Arc<dyn GenerationBackend>,
    settings: GenerationSettings,
}

impl DesignGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>, settings: GenerationSettings) -> Self {
        Self { backend, settings }
    }

    /// Generator with the default model and temperature
    pub fn with_defaults(backend: Arc<dyn GenerationBackend>) -> Self {
        Self::new(backend, GenerationSettings::default())
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Name of the backend requests are sent to
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Build the backend request for a submission without sending it
    pub fn prepare(&self, request: &GenerationRequest) -> InferenceRequest {
        self.prepare_with(request, classify(&request.idea))
    }

    fn prepare_with(
        &self,
        request: &GenerationRequest,
        profile: &CategoryProfile,
    ) -> InferenceRequest {
        let instruction = build_instruction(&request.idea, profile);

        let prepared = InferenceRequest::new(instruction)
            .with_model(self.settings.model.clone())
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_temperature(self.settings.temperature);

        match request.attachment {
            Some(ref attachment) => prepared.with_inline_data(attachment.clone()),
            None => prepared,
        }
    }

    /// Generate a design for one submission.
    ///
    /// Issues exactly one backend request. Backend failures are logged and
    /// returned as [`GenerationError::RemoteGenerationFailure`].
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let request_id = Uuid::new_v4();
        let profile = classify(&request.idea);

        log::info!(
            "[{}] Generating design via {}: category={}, model={}, attachment={}",
            request_id,
            self.backend.name(),
            profile.name,
            self.settings.model,
            request
                .attachment
                .as_ref()
                .map(|a| a.mime_type.as_str())
                .unwrap_or("none")
        );

        let prepared = self.prepare_with(request, profile);

        let raw = match self.backend.generate(&prepared).await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("[{}] Generation error: {}", request_id, e);
                return Err(GenerationError::remote(self.backend.name(), e));
            }
        };

        if raw.is_none() {
            log::warn!("[{}] Backend returned no text", request_id);
        }

        let html = sanitize(raw.as_deref());
        log::debug!("[{}] Completed with {} chars of HTML", request_id, html.len());

        Ok(GenerationResult { html })
    }

    /// Generate from loosely-typed caller input.
    ///
    /// `file_base64` is attached only when `mime_type` is also given.
    pub async fn bring_to_life(
        &self,
        idea: &str,
        file_base64: Option<&str>,
        mime_type: Option<&str>,
    ) -> Result<String> {
        let request = GenerationRequest::from_parts(idea, file_base64, mime_type);
        self.generate(&request).await.map(GenerationResult::into_html)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use forge_inference::{BackendCapabilities, BackendError, ContentPart};

    use super::*;
    use crate::sanitize::FALLBACK_HTML;
    use crate::types::Attachment;

    /// Backend that records requests and answers with a fixed reply
    struct StubBackend {
        reply: Option<String>,
        calls: Mutex<Vec<InferenceRequest>>,
    }

    impl StubBackend {
        fn new(reply: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<InferenceRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationBackend for StubBackend {
        fn name(&self) -> &'static str {
            "Stub"
        }

        fn capabilities(&self) -> BackendCapabilities {
            BackendCapabilities::default()
        }

        async fn generate(
            &self,
            request: &InferenceRequest,
        ) -> std::result::Result<Option<String>, BackendError> {
            self.calls.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GenerationBackend for FailingBackend {
        fn name(&self) -> &'static str {
            "Failing"
        }

        fn capabilities(&self) -> BackendCapabilities {
            BackendCapabilities::default()
        }

        async fn generate(
            &self,
            _request: &InferenceRequest,
        ) -> std::result::Result<Option<String>, BackendError> {
            Err(BackendError::Api {
                status: 429,
                body: "quota exceeded".to_string(),
            })
        }
    }

    fn text_of(part: &ContentPart) -> &str {
        match part {
            ContentPart::Text { text } => text,
            ContentPart::InlineData(_) => panic!("expected text part"),
        }
    }

    #[tokio::test]
    async fn test_fitness_idea_end_to_end() {
        let backend = StubBackend::new(Some("```html\n<html>OK</html>\n```"));
        let generator = DesignGenerator::with_defaults(backend.clone());

        let html = generator
            .bring_to_life("A fitness tracking app for runners", None, None)
            .await
            .unwrap();
        assert_eq!(html, "<html>OK</html>");

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);

        let request = &calls[0];
        assert_eq!(request.parts.len(), 1);
        let instruction = text_of(&request.parts[0]);
        assert!(instruction.contains("CATEGORY: Health"));
        assert!(instruction.contains("Progress rings, activity charts"));
        assert!(instruction.contains("A fitness tracking app for runners"));
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(request.model, "gemini-3-pro-preview");
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_attachment_is_sent_inline() {
        let backend = StubBackend::new(Some("<html></html>"));
        let generator = DesignGenerator::with_defaults(backend.clone());

        generator
            .bring_to_life("Bank app", Some("aGk="), Some("image/png"))
            .await
            .unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].parts.len(), 2);
        assert_eq!(
            calls[0].parts[1],
            ContentPart::InlineData(Attachment::new("aGk=", "image/png"))
        );
    }

    #[tokio::test]
    async fn test_attachment_without_mime_is_dropped() {
        let backend = StubBackend::new(Some("<html></html>"));
        let generator = DesignGenerator::with_defaults(backend.clone());

        generator
            .bring_to_life("Bank app", Some("aGk="), None)
            .await
            .unwrap();

        assert!(!backend.calls()[0].has_inline_data());
    }

    #[tokio::test]
    async fn test_empty_attachment_is_not_sent() {
        let backend = StubBackend::new(Some("<html></html>"));
        let generator = DesignGenerator::with_defaults(backend.clone());
        let request =
            GenerationRequest::new("Bank app").with_attachment(Attachment::new("", "image/png"));

        generator.generate(&request).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].parts.len(), 1);
        assert!(!calls[0].has_inline_data());
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback() {
        let generator = DesignGenerator::with_defaults(StubBackend::new(None));
        let result = generator
            .generate(&GenerationRequest::new("Notes app"))
            .await
            .unwrap();
        assert_eq!(result.html, FALLBACK_HTML);
    }

    #[tokio::test]
    async fn test_backend_failure_is_propagated() {
        let generator = DesignGenerator::with_defaults(Arc::new(FailingBackend));
        let err = generator
            .bring_to_life("Crypto wallet", None, None)
            .await
            .unwrap_err();

        match err {
            GenerationError::RemoteGenerationFailure { backend, ref source } => {
                assert_eq!(backend, "Failing");
                assert!(matches!(source, BackendError::Api { status: 429, .. }));
            }
        }
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_custom_settings_are_used() {
        let backend = StubBackend::new(Some("<html></html>"));
        let settings = GenerationSettings {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
        };
        let generator = DesignGenerator::new(backend.clone(), settings.clone());
        assert_eq!(generator.settings(), &settings);
        assert_eq!(generator.backend_name(), "Stub");

        generator
            .generate(&GenerationRequest::new("Chat app"))
            .await
            .unwrap();
        let calls = backend.calls();
        assert_eq!(calls[0].model, "gemini-2.5-flash");
        assert!((calls[0].temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let backend = StubBackend::new(Some("```html\n<html></html>\n```"));
        let generator = DesignGenerator::with_defaults(backend.clone());

        let (a, b, c) = tokio::join!(
            generator.bring_to_life("Shop for plants", None, None),
            generator.bring_to_life("Meditation timer", None, None),
            generator.bring_to_life("Expense splitter", None, None),
        );
        for html in [a, b, c] {
            assert_eq!(html.unwrap(), "<html></html>");
        }

        let mut categories: Vec<String> = backend
            .calls()
            .iter()
            .map(|request| {
                let text = text_of(&request.parts[0]);
                let start = text.find("CATEGORY: ").unwrap() + "CATEGORY: ".len();
                text[start..].lines().next().unwrap().to_string()
            })
            .collect();
        categories.sort();
        assert_eq!(categories, vec!["E-Commerce", "Fintech", "Health"]);
    }

    #[tokio::test]
    async fn test_sent_request_matches_prepare() {
        let backend = StubBackend::new(Some("<html></html>"));
        let generator = DesignGenerator::with_defaults(backend.clone());
        let request = GenerationRequest::new("Store locator with chat support")
            .with_attachment(Attachment::new("aGk=", "image/webp"));

        generator.generate(&request).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], generator.prepare(&request));
        assert!(text_of(&calls[0].parts[0]).contains("CATEGORY: Social"));
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let generator = DesignGenerator::with_defaults(StubBackend::new(None));
        let request = GenerationRequest::new("Social network for climbers");
        assert_eq!(generator.prepare(&request), generator.prepare(&request));
    }
}

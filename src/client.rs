//! The one HTTP client for the `generateContent` endpoint.

use tracing::{debug, error, instrument, warn};
use url::Url;
use uuid::Uuid;

use crate::config::GeminiConfig;
use crate::content::StudyContent;
use crate::error::{GenerationError, RemoteFailure};
use crate::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::{media, prompt};

/// Client that turns one question into structured study content.
#[derive(Debug, Clone)]
pub struct StudyClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl StudyClient {
    /// Builds a client over the given configuration.
    ///
    /// An absent or blank key fails here, before any request goes out.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        if config.api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Builds a client from the `GEMINI_*` environment variables.
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::new(GeminiConfig::from_env()?)
    }

    fn endpoint(&self) -> Result<Url, RemoteFailure> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        ))?;
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }

    /// Sends one question and returns the decoded study content.
    ///
    /// `image` is an optional JPEG capture, either bare base64 or a full
    /// `data:` URI. Any remote or decoding failure surfaces as
    /// [`GenerationError::Remote`] with its single user-facing message.
    #[instrument(
        skip(self, prompt, image),
        fields(request_id = %Uuid::new_v4(), model = %self.config.model)
    )]
    pub async fn generate(
        &self,
        subject: &str,
        prompt: &str,
        image: Option<&str>,
    ) -> Result<StudyContent, GenerationError> {
        if self.config.api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let request = self.build_request(subject, prompt, image);
        debug!(
            prompt_len = prompt.len(),
            has_image = image.is_some(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body_len = body.len(), "generateContent returned an error status");
            return Err(RemoteFailure::Status { status, body }.into());
        }

        let envelope: GenerateContentResponse = response.json().await?;

        if let Some(reason) = envelope
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            warn!(%reason, "prompt was blocked upstream");
            return Err(RemoteFailure::Blocked { reason }.into());
        }

        let reply = envelope.text().ok_or(RemoteFailure::EmptyReply)?;
        let content: StudyContent = serde_json::from_str(extract_json(&reply))?;
        content.validate().map_err(RemoteFailure::from)?;

        debug!("study content decoded");
        Ok(content)
    }

    fn build_request(
        &self,
        subject: &str,
        prompt: &str,
        image: Option<&str>,
    ) -> GenerateContentRequest {
        let mut parts = vec![Part::text(prompt)];
        if let Some(image) = image {
            let payload = media::strip_data_uri(image);
            debug!(payload_len = payload.len(), "attaching inline image");
            parts.push(Part::inline_jpeg(payload));
        }

        GenerateContentRequest {
            contents: vec![Content::user(parts)],
            system_instruction: Content::system_text(prompt::system_instruction(subject)),
            generation_config: GenerationConfig::structured_study_content(),
        }
    }
}

/// Pulls the JSON document out of a model reply.
///
/// Schema-constrained replies are normally bare JSON, but the model
/// occasionally wraps them in a markdown code fence or leading prose.
fn extract_json(reply: &str) -> &str {
    let trimmed = reply.trim();

    if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return &trimmed[start..=end];
        }
    }

    trimmed
}

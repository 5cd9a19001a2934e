//! Request and response bodies for `models/{model}:generateContent`.

use serde::{Deserialize, Serialize};

use super::schema::{study_content_schema, Schema};

/// Body POSTed to the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

/// A turn of conversation: an optional role plus its parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn carrying the given parts.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// A role-less system instruction with a single text part.
    pub fn system_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a turn. Untagged: a part is either plain text or inline
/// binary data, told apart by its fields. `Text` must stay first so that
/// text parts never decode as empty data blobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// An inline JPEG attachment from already base64-encoded data.
    pub fn inline_jpeg(data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: crate::media::INLINE_IMAGE_MIME.to_string(),
                data: data.into(),
            },
        }
    }
}

/// Base64 payload plus its MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Decoding controls sent alongside the contents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
    pub thinking_config: ThinkingConfig,
}

impl GenerationConfig {
    /// JSON output constrained to the study-content schema, with thinking
    /// disabled for latency.
    pub fn structured_study_content() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: study_content_schema(),
            thinking_config: ThinkingConfig { thinking_budget: 0 },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Body of a `generateContent` reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Present when the prompt itself was rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// reply carries no text at all.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut text = String::new();
        for part in &candidate.content.parts {
            if let Part::Text { text: piece } = part {
                text.push_str(piece);
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

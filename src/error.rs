//! Error surface: two user-facing kinds, diagnostics kept for the logs.

use thiserror::Error;

use crate::content::ShapeViolation;

/// Fixed message shown to students whenever the model call or its payload
/// fails. Matches the wording the rest of the product uses.
pub const AI_FAILURE_MESSAGE: &str = "Lỗi xử lý dữ liệu từ AI.";

/// Fixed message shown when no credential is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "Chưa cấu hình GEMINI_API_KEY. Vui lòng kiểm tra biến môi trường.";

/// Everything `generate` can fail with.
///
/// Only two messages ever reach the user: a configuration error raised
/// before any network activity, and one fixed text for every remote or
/// decode failure. The actual cause rides along as a source for logging.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// `GEMINI_API_KEY` is absent or blank.
    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingApiKey,

    /// The remote call failed, or its reply could not be decoded.
    #[error("{}", AI_FAILURE_MESSAGE)]
    Remote(#[from] RemoteFailure),
}

/// What actually went wrong upstream. Never shown to end users.
#[derive(Debug, Error)]
pub enum RemoteFailure {
    #[error("configured endpoint is not a valid URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("prompt was blocked upstream: {reason}")]
    Blocked { reason: String },

    #[error("response carried no answer text")]
    EmptyReply,

    #[error("answer text is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("decoded payload violates the study-content shape: {0}")]
    Shape(#[from] ShapeViolation),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Remote(RemoteFailure::Transport(err))
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Remote(RemoteFailure::Decode(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn remote_failures_share_one_user_facing_message() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let errors = [
            GenerationError::Remote(RemoteFailure::EmptyReply),
            GenerationError::Remote(RemoteFailure::Blocked {
                reason: "SAFETY".to_string(),
            }),
            GenerationError::from(decode),
        ];

        for err in &errors {
            assert_eq!(err.to_string(), AI_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn missing_key_uses_the_configuration_message() {
        assert_eq!(
            GenerationError::MissingApiKey.to_string(),
            MISSING_KEY_MESSAGE
        );
    }

    #[test]
    fn diagnostic_cause_stays_reachable_as_source() {
        let err = GenerationError::Remote(RemoteFailure::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "quota".to_string(),
        });

        let source = err.source().expect("remote errors carry their cause");
        assert!(source.to_string().contains("429"));
        assert!(source.to_string().contains("quota"));
    }
}

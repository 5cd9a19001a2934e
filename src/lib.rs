//! Symbiotic is a thin client for Gemini's `generateContent` endpoint that
//! answers one study question at a time for Vietnamese students.
//!
//! One call sends a subject, a question, and optionally a JPEG capture of
//! the exercise, and returns a [`StudyContent`]: a quick answer, a similar
//! multiple-choice question, Socratic hints, a theory summary, extended
//! knowledge, a tool guide, and a Mermaid mindmap. The reply is
//! schema-constrained JSON, decoded strictly.
//!
//! ```no_run
//! # async fn run() -> Result<(), symbiotic::GenerationError> {
//! let content = symbiotic::generate_study_content(
//!     "Toán",
//!     "Giải phương trình 2x + 1 = 5",
//!     None,
//! )
//! .await?;
//!
//! println!("{}", content.speed.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod gemini;
pub mod media;
pub mod prompt;

pub use client::StudyClient;
pub use config::GeminiConfig;
pub use content::{ShapeViolation, SimilarQuestion, SpeedBlock, StudyContent};
pub use error::{GenerationError, RemoteFailure};

/// Answers one question with a client built from the `GEMINI_*` environment
/// variables. Convenience wrapper over [`StudyClient::generate`].
pub async fn generate_study_content(
    subject: &str,
    prompt: &str,
    image: Option<&str>,
) -> Result<StudyContent, GenerationError> {
    StudyClient::from_env()?.generate(subject, prompt, image).await
}

//! Wire-level types for the Gemini `generateContent` API.

pub mod schema;
pub mod wire;

pub use schema::{study_content_schema, Schema, SchemaType};
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, PromptFeedback, ThinkingConfig,
};

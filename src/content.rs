//! The study-content record handed back to callers.
//!
//! The shape is fixed: a quick answer plus one similar multiple-choice
//! question, Socratic hints, a theory summary, extended knowledge, a tool
//! usage guide, and a Mermaid mindmap descriptor. Decoding is strict, with
//! every field required, and [`StudyContent::validate`] enforces the bounds
//! the multiple-choice block must obey before the record leaves the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A similar question always offers exactly four options.
pub const OPTION_COUNT: usize = 4;

/// The full JSON-structured answer for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyContent {
    /// Quick answer plus a practice question of the same kind.
    pub speed: SpeedBlock,
    /// 2-3 key thinking steps phrased as questions, never a worked solution.
    pub socratic: String,
    /// Core theory systematised into short paragraphs.
    pub notebooklm: String,
    /// Extended knowledge and real-world connections.
    pub perplexity: String,
    /// Key-by-key Casio 580 VNX guide for maths; precise citations elsewhere.
    pub tools: String,
    /// Mermaid mindmap descriptor (`mindmap` / `root((Topic))` mini-language).
    pub mermaid: String,
}

/// The "answer fast" block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedBlock {
    /// Shortest correct answer, no explanation.
    pub answer: String,
    /// A fresh multiple-choice question of the same kind.
    pub similar: SimilarQuestion,
}

/// A four-option multiple-choice question with one correct option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: u8,
}

/// A decoded reply that does not satisfy the multiple-choice bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("similar question carries {0} options, expected 4")]
    OptionCount(usize),

    #[error("correctIndex {0} is outside 0..=3")]
    CorrectIndex(u8),
}

impl StudyContent {
    /// Checks the bounds the schema constraint cannot express: exactly four
    /// options, and a correct index that points at one of them.
    pub fn validate(&self) -> Result<(), ShapeViolation> {
        self.speed.similar.validate()
    }
}

impl SimilarQuestion {
    fn validate(&self) -> Result<(), ShapeViolation> {
        if self.options.len() != OPTION_COUNT {
            return Err(ShapeViolation::OptionCount(self.options.len()));
        }
        if usize::from(self.correct_index) >= OPTION_COUNT {
            return Err(ShapeViolation::CorrectIndex(self.correct_index));
        }
        Ok(())
    }

    /// The option text `correct_index` points at.
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(usize::from(self.correct_index))
            .map(String::as_str)
    }
}

//! The core models for a question-and-answer session transcript.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "system")]
    System,
}

/// A single line of the session transcript. Entries are immutable
/// once constructed; the transcript only ever grows.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TranscriptEntry {
    role: Role,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<String>>,
}

impl TranscriptEntry {
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            text: text.to_string(),
            sources: None,
        }
    }

    /// An answer from the backend, optionally annotated with the
    /// timestamp citations it was grounded on.
    pub fn ai(text: &str, sources: Option<Vec<String>>) -> Self {
        Self {
            role: Role::Ai,
            text: text.to_string(),
            sources,
        }
    }

    pub fn system(text: &str) -> Self {
        Self {
            role: Role::System,
            text: text.to_string(),
            sources: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sources(&self) -> Option<&[String]> {
        self.sources.as_deref()
    }
}

/// Append-only, ordered log of transcript entries. Insertion order
/// is display order.
#[derive(Default)]
pub struct Transcript(Vec<TranscriptEntry>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.0.clone()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.0.push(entry)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//! Explicitly owned session state. All fields are private; the
//! accessor and mutator methods here are the only mutation path, so
//! nothing outside the session can poke at the status or rewrite the
//! transcript.
use std::mem;

use super::models::{Transcript, TranscriptEntry};

/// Ingestion status for the session. Exactly one state is active at
/// a time and transitions happen only through `Session::submit_source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Default)]
pub struct SessionState {
    status: Status,
    transcript: Transcript,
    pending_question: String,
    source_url: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn append(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
    }

    pub fn pending_question(&self) -> &str {
        &self.pending_question
    }

    pub fn set_pending_question(&mut self, question: &str) {
        self.pending_question = question.to_string();
    }

    /// Takes the pending question, leaving the buffer empty. Used by
    /// `submit_question` to clear the input optimistically before
    /// the network round trip.
    pub(crate) fn take_pending_question(&mut self) -> String {
        mem::take(&mut self.pending_question)
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn set_source_url(&mut self, url: &str) {
        self.source_url = url.to_string();
    }
}

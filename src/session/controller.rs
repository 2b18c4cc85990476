//! The session controller: orchestrates ingestion and
//! question-answering against the backend and translates every
//! response or failure into status and transcript updates. Nothing
//! here returns an error to the caller; the transcript is the error
//! surface.
use crate::core::AppConfig;
use crate::service;
use crate::session::models::{Transcript, TranscriptEntry};
use crate::session::state::{SessionState, Status};

const INGEST_SUCCESS_NOTICE: &str = "Analysis completed. You can ask your questions now.";
const INGEST_FAILURE_NOTICE: &str = "Connection failed.";
const QUERY_FAILURE_NOTICE: &str = "Failed to get answer.";

/// A single in-memory question-and-answer session against one
/// backend. Owns the session state exclusively; both operations take
/// `&mut self` so at most one request per session is in flight.
pub struct Session {
    api_url: String,
    name: String,
    state: SessionState,
}

impl Session {
    pub fn new(api_url: &str, name: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            name: name.to_string(),
            state: SessionState::new(),
        }
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::new(&config.api_url, &config.session_name)
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }

    pub fn pending_question(&self) -> &str {
        self.state.pending_question()
    }

    pub fn set_pending_question(&mut self, question: &str) {
        self.state.set_pending_question(question);
    }

    pub fn source_url(&self) -> &str {
        self.state.source_url()
    }

    pub fn set_source_url(&mut self, url: &str) {
        self.state.set_source_url(url);
    }

    /// Submits the current source URL for ingestion.
    ///
    /// No-op when the URL buffer is empty or an ingestion is already
    /// in flight. Otherwise moves the status to `Loading`, and after
    /// the round trip to either `Ready` (backend reported success)
    /// or `Error` (any other response, or a transport failure). The
    /// URL buffer is left intact for resubmission.
    pub async fn submit_source(&mut self) {
        if self.state.source_url().is_empty() || self.state.status() == Status::Loading {
            return;
        }

        let url = self.state.source_url().to_string();
        self.state.set_status(Status::Loading);
        tracing::info!("Submitting {} for ingestion", url);

        match service::process(&self.api_url, &url, &self.name).await {
            Ok(resp) if resp.status == "success" => {
                tracing::info!("Ingestion finished, chunks={:?}", resp.chunks);
                self.state.set_status(Status::Ready);
                let notice = match resp.chunks {
                    Some(n) => format!("{} Indexed {} segments.", INGEST_SUCCESS_NOTICE, n),
                    None => INGEST_SUCCESS_NOTICE.to_string(),
                };
                self.state.append(TranscriptEntry::system(&notice));
            }
            Ok(resp) => {
                tracing::warn!("Backend rejected ingestion, status={}", resp.status);
                self.state.set_status(Status::Error);
                self.state.append(TranscriptEntry::system(INGEST_FAILURE_NOTICE));
            }
            Err(err) => {
                tracing::error!("Ingestion request failed: {}", err);
                self.state.set_status(Status::Error);
                self.state.append(TranscriptEntry::system(INGEST_FAILURE_NOTICE));
            }
        }
    }

    /// Submits the pending question and appends the answer to the
    /// transcript.
    ///
    /// No-op when the question buffer is empty. The buffer is
    /// cleared and the question echoed to the transcript before the
    /// request goes out, so the user entry always precedes the
    /// response entry. Failures append a notice instead of an
    /// answer. The ingestion status is never touched; questions are
    /// not gated on it either, the backend decides whether it can
    /// answer.
    pub async fn submit_question(&mut self) {
        if self.state.pending_question().is_empty() {
            return;
        }

        let question = self.state.take_pending_question();
        self.state.append(TranscriptEntry::user(&question));
        tracing::debug!("Asking: {}", question);

        match service::chat(&self.api_url, &question).await {
            Ok(resp) => {
                let sources = resp.sources.filter(|s| !s.is_empty());
                self.state.append(TranscriptEntry::ai(&resp.answer, sources));
            }
            Err(err) => {
                tracing::error!("Query request failed: {}", err);
                self.state.append(TranscriptEntry::system(QUERY_FAILURE_NOTICE));
            }
        }
    }
}

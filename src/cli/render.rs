//! Terminal projection of the session: role-prefixed transcript
//! lines, optional source citations, and a status label. Stateless;
//! everything here consumes the transcript and formats it.
use crate::session::{Role, Status, Transcript, TranscriptEntry};

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "IDLE",
        Status::Loading => "LOADING",
        Status::Ready => "READY",
        Status::Error => "ERROR",
    }
}

pub fn entry_line(entry: &TranscriptEntry) -> String {
    match entry.role() {
        Role::User => format!("> USER: {}", entry.text()),
        Role::Ai => format!(">> AI: {}", entry.text()),
        Role::System => format!(">> SYSTEM: {}", entry.text()),
    }
}

pub fn sources_line(entry: &TranscriptEntry) -> Option<String> {
    let sources = entry.sources()?;
    if sources.is_empty() {
        return None;
    }
    Some(format!("Sources: {}", sources.join(", ")))
}

/// Prints every entry at or past `rendered` and returns the new
/// cursor. Callers keep the cursor so each entry is printed exactly
/// once even though the transcript only grows.
pub fn print_new_entries(transcript: &Transcript, rendered: usize) -> usize {
    for entry in transcript.iter().skip(rendered) {
        println!("{}", entry_line(entry));
        if let Some(line) = sources_line(entry) {
            println!("    {}", line);
        }
    }
    transcript.len()
}

//! HTTP client for the video ingestion and query backend.
//!
//! Two endpoints are consumed: `POST /process` to ingest a video URL
//! and `POST /chat` to ask a question against the ingested
//! content. Response shapes are validated here with typed structs so
//! a malformed body surfaces as an error rather than leaking into
//! the session.
use std::time::Duration;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ProcessRequest<'a> {
    url: &'a str,
    name: &'a str,
}

/// Response from `POST /process`. Any `status` other than
/// `"success"` means the backend rejected the ingestion.
#[derive(Clone, Deserialize, Debug)]
pub struct ProcessResponse {
    pub status: String,
    /// Number of transcript segments indexed, reported on success.
    #[serde(default)]
    pub chunks: Option<u64>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

/// Response from `POST /chat`.
#[derive(Clone, Deserialize, Debug)]
pub struct ChatResponse {
    pub answer: String,
    /// Timestamp citations into the video, in the order the backend
    /// ranked them.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

/// Submits a video URL for ingestion under the given session label.
pub async fn process(api_url: &str, url: &str, name: &str) -> Result<ProcessResponse, Error> {
    let endpoint = format!("{}/process", api_url.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(endpoint)
        .header("Content-Type", "application/json")
        // Ingestion downloads and indexes the whole video
        .timeout(Duration::from_secs(60 * 10))
        .json(&ProcessRequest { url, name })
        .send()
        .await?
        .json()
        .await?;

    Ok(response)
}

/// Asks a question against whatever content the backend has ingested.
pub async fn chat(api_url: &str, question: &str) -> Result<ChatResponse, Error> {
    let endpoint = format!("{}/chat", api_url.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(endpoint)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 2))
        .json(&ChatRequest { question })
        .send()
        .await?
        .json()
        .await?;

    Ok(response)
}

//! Test utilities for integration tests
use mockito::{Mock, ServerGuard};

use vidrag::session::Session;

/// Creates a session pointed at the given mock server with the fixed
/// session label the client always sends.
pub fn test_session(server: &ServerGuard) -> Session {
    Session::new(server.url().as_str(), "demo_video")
}

/// Mocks a successful ingestion response on `POST /process`.
pub fn mock_process_success(server: &mut ServerGuard, chunks: u64) -> Mock {
    server
        .mock("POST", "/process")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"status":"success","chunks":{}}}"#, chunks))
        .create()
}

/// Mocks an ingestion response the backend rejected in-band.
pub fn mock_process_rejected(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/process")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"failed"}"#)
        .create()
}

/// Mocks a successful answer on `POST /chat`.
pub fn mock_chat_answer(server: &mut ServerGuard, answer: &str, sources: &[&str]) -> Mock {
    let body = serde_json::json!({
        "answer": answer,
        "sources": sources,
    });
    server
        .mock("POST", "/chat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// Mocks a transport-level failure (non-JSON body) on `POST /chat`.
pub fn mock_chat_failure(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/chat")
        .with_status(502)
        .with_body("Bad Gateway")
        .create()
}

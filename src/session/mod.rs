pub mod controller;
pub mod models;
pub mod state;

pub use controller::Session;
pub use models::{Role, Transcript, TranscriptEntry};
pub use state::{SessionState, Status};

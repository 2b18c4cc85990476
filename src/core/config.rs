use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub session_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "8000";
        let api_url =
            env::var("VIDRAG_API_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let session_name =
            env::var("VIDRAG_SESSION_NAME").unwrap_or_else(|_| "demo_video".to_string());

        Self {
            api_url,
            session_name,
        }
    }
}

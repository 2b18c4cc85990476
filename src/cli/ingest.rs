use anyhow::{Result, anyhow};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::render;
use crate::core::AppConfig;
use crate::session::{Session, Status};

pub async fn run(url: String) -> Result<()> {
    // If using the CLI only and not the REPL, set up tracing to
    // output to stdout and stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    let mut session = Session::with_config(&config);
    session.set_source_url(&url);
    session.submit_source().await;

    render::print_new_entries(session.transcript(), 0);

    match session.status() {
        Status::Ready => Ok(()),
        _ => Err(anyhow!("Ingestion failed for {}", url)),
    }
}

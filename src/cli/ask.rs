use anyhow::{Result, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::render;
use crate::core::AppConfig;
use crate::session::{Role, Session};

pub async fn run(question: String) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();
    let mut session = Session::with_config(&config);
    session.set_pending_question(&question);
    session.submit_question().await;

    render::print_new_entries(session.transcript(), 0);

    let answered = session
        .transcript()
        .iter()
        .any(|entry| entry.role() == Role::Ai);
    if !answered {
        bail!("No answer received for: {}", question);
    }

    Ok(())
}

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::cli::render;
use crate::core::AppConfig;
use crate::session::Session;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let mut session = Session::with_config(&config);
    // Index of the next transcript entry to print
    let mut rendered = 0;

    println!("Connected to {}", config.api_url);
    println!("Commands: :load <url> to ingest a video, :status, :quit. Anything else is a question.");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                if let Some(url) = line.strip_prefix(":load") {
                    session.set_source_url(url.trim());
                    session.submit_source().await;
                } else if line == ":status" {
                    println!("STATUS: [{}]", render::status_label(session.status()));
                    continue;
                } else if line == ":quit" {
                    break;
                } else {
                    session.set_pending_question(line);
                    session.submit_question().await;
                }

                rendered = render::print_new_entries(session.transcript(), rendered);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

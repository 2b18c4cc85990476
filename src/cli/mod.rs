use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod ingest;
pub mod render;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive question-and-answer session
    Chat {},
    /// Submit a video URL for ingestion and exit
    Ingest {
        #[arg(long)]
        url: String,
    },
    /// Ask a single question against already-ingested content and exit
    Ask {
        #[arg(long)]
        question: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Chat {}) => {
            chat::run().await?;
        }
        Some(Command::Ingest { url }) => {
            ingest::run(url).await?;
        }
        Some(Command::Ask { question }) => {
            ask::run(question).await?;
        }
        None => {}
    }

    Ok(())
}

use anyhow::Result;
use vidrag::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}

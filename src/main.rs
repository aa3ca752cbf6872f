//! News feed CLI
//!
//! Command-line interface for searching top headlines

use clap::Parser;
use newsfeed_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        if let Some(detail) = e.api_detail() {
            eprintln!("  API said: {detail}");
        }
        if let Some(hint) = e.hint() {
            eprintln!("  Hint: {hint}");
        }
        std::process::exit(1);
    }
}

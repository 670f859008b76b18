//! issuesync CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use issuesync::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the per-operation status lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => issuesync::cli::commands::sync::execute(args).await,
    };

    if let Err(err) = result {
        issuesync::cli::handle_error(&err);
    }
}

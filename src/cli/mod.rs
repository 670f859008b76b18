//! Command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};

/// One-way GitHub issues to Notion database sync.
#[derive(Debug, Parser)]
#[command(name = "issuesync", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile GitHub issues into the Notion database.
    Sync(commands::sync::SyncArgs),
}

/// Report a fatal error and exit non-zero.
pub fn handle_error(err: &anyhow::Error) {
    tracing::error!(error = ?err, "sync aborted");
    eprintln!("Error: {err:#}");
    std::process::exit(1);
}

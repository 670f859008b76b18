//! The `sync` subcommand: full or delta reconciliation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::adapters::github::{GitHubClient, GitHubIssue};
use crate::adapters::notion::NotionClient;
use crate::domain::models::Issue;
use crate::domain::ports::StateFilter;
use crate::infrastructure::config::ConfigLoader;
use crate::services::SyncService;

/// Arguments for `issuesync sync`.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Serialized GitHub issue payload. When present, only this issue is
    /// reconciled (delta mode) with a targeted lookup instead of full
    /// pagination. Defaults to the ISSUE_CONTEXT variable that the
    /// GitHub Actions workflow exports.
    #[arg(long, env = "ISSUE_CONTEXT", value_name = "JSON")]
    pub issue: Option<String>,

    /// Restrict the full sync to issues currently open on GitHub.
    #[arg(long)]
    pub open_only: bool,
}

/// Run a sync pass.
pub async fn execute(args: SyncArgs) -> Result<()> {
    let config = ConfigLoader::load().context("Configuration is incomplete")?;
    let (owner, repo) = config.repo_parts()?;

    let tracker = Arc::new(GitHubClient::new(
        config.github_token.clone(),
        owner,
        repo,
    ));
    let store = Arc::new(NotionClient::new(
        config.notion_api_key.clone(),
        config.notion_database_id.clone(),
    ));
    let service = SyncService::new(tracker, store, config.project_id.clone());

    let summary = match &args.issue {
        Some(raw) => {
            let issue: Issue = GitHubIssue::from_payload(raw)
                .context("Could not parse the delta issue payload")?
                .into();
            tracing::info!(number = issue.number, "running delta sync");
            service.run_delta(issue).await?
        }
        None => {
            let filter = if args.open_only {
                StateFilter::Open
            } else {
                StateFilter::All
            };
            tracing::info!(?filter, "running full sync");
            service.run_full(filter).await?
        }
    };

    tracing::info!(
        created = summary.created,
        updated = summary.updated,
        failed = summary.failed,
        "sync complete"
    );
    Ok(())
}

//! GitHub Issues API wire models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. The same
//! shape arrives through the listing endpoint and through the delta-mode
//! `ISSUE_CONTEXT` payload that GitHub Actions hands to the process.

use serde::Deserialize;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{Issue, IssueState};

/// An issue returned by the GitHub API.
///
/// Note: issues and pull requests share the same endpoint. Pull requests
/// include a non-null `pull_request` field; planning skips those.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 for "#42").
    pub number: u64,
    /// Issue title (may be absent on trimmed delta payloads).
    #[serde(default)]
    pub title: Option<String>,
    /// Current state: "open" or "closed".
    #[serde(default)]
    pub state: Option<String>,
    /// URL to view the issue in the GitHub UI.
    pub html_url: String,
    /// Present when this item is actually a pull request, not an issue.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request resource.
    pub url: String,
}

impl GitHubIssue {
    /// Parse a serialized issue payload (delta mode).
    pub fn from_payload(raw: &str) -> SyncResult<Self> {
        serde_json::from_str(raw).map_err(|e| SyncError::InvalidPayload(e.to_string()))
    }
}

impl From<GitHubIssue> for Issue {
    fn from(gh: GitHubIssue) -> Self {
        // Anything other than an explicit "closed" counts as open.
        let state = match gh.state.as_deref() {
            Some("closed") => IssueState::Closed,
            _ => IssueState::Open,
        };
        Self {
            number: gh.number,
            title: gh.title,
            url: gh.html_url,
            state,
            is_pull_request: gh.pull_request.is_some(),
        }
    }
}

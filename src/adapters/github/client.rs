//! GitHub HTTP client with rate limiting.
//!
//! Wraps the issue-listing slice of the GitHub REST API v3. Includes a
//! token-bucket rate limiter to stay within the 5 000 req/hour
//! authenticated API limit.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::adapters::rate_limit::RateLimiter;
use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::ports::{SourcePage, SourceTracker, StateFilter};

use super::models::GitHubIssue;

/// Base URL for the GitHub REST API v3.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Issues fetched per listing page. A page shorter than this is the
/// final page; a full page means another one must be requested.
pub const PER_PAGE: usize = 100;

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`SyncResult`] and map HTTP / network errors to
/// [`SyncError::SourceFetchFailed`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// GitHub personal access token or fine-grained token.
    token: String,
    /// Repository owner (user or organisation name).
    owner: String,
    /// Repository name.
    repo: String,
    /// API base URL; overridable for tests.
    base_url: String,
    /// Shared rate limiter (5 000 req/hr for authenticated requests).
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl GitHubClient {
    /// Create a new client for one repository.
    pub fn new(token: String, owner: String, repo: String) -> Self {
        Self::with_base_url(token, owner, repo, GITHUB_API_BASE.to_string())
    }

    /// Create a client pointed at a custom API base URL.
    pub fn with_base_url(token: String, owner: String, repo: String, base_url: String) -> Self {
        // GitHub allows 5 000 authenticated requests per hour.
        let rate_limiter = RateLimiter::new(5_000, Duration::from_secs(3_600));
        Self {
            http: Client::new(),
            token,
            owner,
            repo,
            base_url,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        }
    }

    /// Acquire a rate-limit token and build an authorized request.
    async fn rate_limited_request(
        &self,
        method: reqwest::Method,
        url: &str,
    ) -> reqwest::RequestBuilder {
        self.rate_limiter.lock().await.acquire().await;
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "issuesync")
    }

    /// Fetch one page of the repository's issue listing.
    ///
    /// Note: GitHub's `/issues` endpoint also returns pull requests.
    /// Callers are responsible for filtering them out via the
    /// `pull_request` field.
    pub async fn list_issues_page(
        &self,
        filter: StateFilter,
        page: u32,
    ) -> SyncResult<Vec<GitHubIssue>> {
        let state = match filter {
            StateFilter::Open => "open",
            StateFilter::All => "all",
        };
        let url = format!(
            "{}/repos/{}/{}/issues?state={}&per_page={}&page={}",
            self.base_url, self.owner, self.repo, state, PER_PAGE, page
        );

        let req = self.rate_limited_request(reqwest::Method::GET, &url).await;

        let resp = req.send().await.map_err(|e| {
            SyncError::SourceFetchFailed(format!("GitHub list_issues request failed: {e}"))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::SourceFetchFailed(format!(
                "GitHub list_issues returned {status}: {body}"
            )));
        }

        resp.json::<Vec<GitHubIssue>>().await.map_err(|e| {
            SyncError::SourceFetchFailed(format!("GitHub list_issues parse failed: {e}"))
        })
    }
}

#[async_trait]
impl SourceTracker for GitHubClient {
    async fn list_page(&self, filter: StateFilter, page: u32) -> SyncResult<SourcePage> {
        let batch = self.list_issues_page(filter, page).await?;
        // GitHub has no explicit next-page token here; a full page means
        // more may follow, a short page is the last one.
        let next_page = (batch.len() == PER_PAGE).then_some(page + 1);
        Ok(SourcePage {
            issues: batch.into_iter().map(Into::into).collect(),
            next_page,
        })
    }
}

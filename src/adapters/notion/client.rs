//! Notion HTTP client with rate limiting.
//!
//! Wraps the database-query and page create/update endpoints of the
//! Notion REST API. Includes a token-bucket rate limiter to stay within
//! the documented 3 req/second average limit.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tokio::sync::Mutex;

use crate::adapters::rate_limit::RateLimiter;
use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::fields::PROP_NUMBER;
use crate::domain::models::{PageFields, PageHandle, WriteStatus};
use crate::domain::ports::{TargetPage, TargetStore};

use super::models::QueryDatabaseResponse;

/// Base URL for the Notion REST API.
const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Pinned API version header value.
const NOTION_VERSION: &str = "2022-06-28";

/// Records fetched per database-query batch (Notion's maximum).
const QUERY_PAGE_SIZE: usize = 100;

/// HTTP client for the Notion REST API.
///
/// Query failures map to [`SyncError::TargetFetchFailed`]. Create and
/// update calls return the HTTP status as a [`WriteStatus`] value instead,
/// so a rejected write can be reported per record without ending the pass.
#[derive(Debug, Clone)]
pub struct NotionClient {
    /// The underlying HTTP client.
    http: Client,
    /// Notion integration token.
    token: String,
    /// Database the synced pages live in.
    database_id: String,
    /// API base URL; overridable for tests.
    base_url: String,
    /// Shared rate limiter.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl NotionClient {
    /// Create a new client for one database.
    pub fn new(token: String, database_id: String) -> Self {
        Self::with_base_url(token, database_id, NOTION_API_BASE.to_string())
    }

    /// Create a client pointed at a custom API base URL.
    pub fn with_base_url(token: String, database_id: String, base_url: String) -> Self {
        // Notion allows an average of 3 requests per second.
        let rate_limiter = RateLimiter::new(3, Duration::from_secs(1));
        Self {
            http: Client::new(),
            token,
            database_id,
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
            .header("Notion-Version", NOTION_VERSION)
            .header("Content-Type", "application/json")
    }

    /// Run one database query with the given body.
    async fn query_database(
        &self,
        body: serde_json::Value,
    ) -> SyncResult<QueryDatabaseResponse> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        let resp = self
            .rate_limited_request(reqwest::Method::POST, &url)
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                SyncError::TargetFetchFailed(format!("Notion query request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(SyncError::TargetFetchFailed(format!(
                "Notion query returned {status}: {text}"
            )));
        }

        resp.json::<QueryDatabaseResponse>()
            .await
            .map_err(|e| SyncError::TargetFetchFailed(format!("Notion query parse failed: {e}")))
    }

    /// Send a write request and fold the outcome into a [`WriteStatus`].
    async fn write_request(
        &self,
        method: reqwest::Method,
        url: &str,
        body: serde_json::Value,
        what: &str,
    ) -> SyncResult<WriteStatus> {
        let resp = self
            .rate_limited_request(method, url)
            .await
            .json(&body)
            .send()
            .await
            .map_err(|e| SyncError::WriteFailed(format!("Notion {what} request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %text, "Notion {} rejected", what);
        }
        Ok(WriteStatus(status.as_u16()))
    }
}

#[async_trait]
impl TargetStore for NotionClient {
    async fn query_page(&self, cursor: Option<String>) -> SyncResult<TargetPage> {
        let mut body = json!({ "page_size": QUERY_PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }

        let resp = self.query_database(body).await?;
        let next_cursor = resp.continuation()?;
        Ok(TargetPage {
            records: resp.results.into_iter().map(Into::into).collect(),
            next_cursor,
        })
    }

    async fn find_by_number(&self, number: u64) -> SyncResult<Option<PageHandle>> {
        let body = json!({
            "page_size": 1,
            "filter": {
                "property": PROP_NUMBER,
                "number": { "equals": number }
            }
        });

        let resp = self.query_database(body).await?;
        Ok(resp.results.into_iter().next().map(|p| PageHandle(p.id)))
    }

    async fn create(&self, fields: &PageFields) -> SyncResult<WriteStatus> {
        let url = format!("{}/pages", self.base_url);
        let body = json!({
            "parent": { "type": "database_id", "database_id": self.database_id },
            "properties": fields.to_properties(),
        });
        self.write_request(reqwest::Method::POST, &url, body, "create")
            .await
    }

    async fn update(&self, handle: &PageHandle, fields: &PageFields) -> SyncResult<WriteStatus> {
        let url = format!("{}/pages/{}", self.base_url, handle.as_str());
        let body = json!({ "properties": fields.to_properties() });
        self.write_request(reqwest::Method::PATCH, &url, body, "update")
            .await
    }
}

//! Port traits for the two external collaborators.
//!
//! The sync engine talks to GitHub and Notion exclusively through these
//! traits, keeping planning logic testable against in-memory fakes. Each
//! port exposes its system's native pagination scheme; the pager turns
//! either into a complete record set.

use async_trait::async_trait;

use super::errors::SyncResult;
use super::models::{Issue, PageFields, PageHandle, WriteStatus};

/// Which issue states the source listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    /// Open issues only.
    Open,
    /// Open and closed issues.
    All,
}

/// One page of the source issue listing.
#[derive(Debug, Clone)]
pub struct SourcePage {
    /// Issues in this page, pull requests included; callers filter them.
    pub issues: Vec<Issue>,
    /// Number of the next page, or `None` on the final page.
    pub next_page: Option<u32>,
}

/// One existing record in the target store.
#[derive(Debug, Clone)]
pub struct TargetRecord {
    /// The store-assigned page handle.
    pub handle: PageHandle,
    /// The denormalized issue number, absent on pages that were never
    /// synced by this system.
    pub number: Option<u64>,
}

/// One page of the target store listing.
#[derive(Debug, Clone)]
pub struct TargetPage {
    /// Records in this page.
    pub records: Vec<TargetRecord>,
    /// Opaque cursor of the next page, or `None` on the final page.
    pub next_cursor: Option<String>,
}

/// Port for the source issue tracker (GitHub).
#[async_trait]
pub trait SourceTracker: Send + Sync {
    /// Fetch one page of the issue listing. Pages are numbered from 1.
    async fn list_page(&self, filter: StateFilter, page: u32) -> SyncResult<SourcePage>;
}

/// Port for the target record store (Notion).
#[async_trait]
pub trait TargetStore: Send + Sync {
    /// Fetch one page of the full database listing.
    async fn query_page(&self, cursor: Option<String>) -> SyncResult<TargetPage>;

    /// Targeted lookup of the page carrying a given issue number, used by
    /// delta mode instead of full pagination.
    async fn find_by_number(&self, number: u64) -> SyncResult<Option<PageHandle>>;

    /// Create a page with the given fields. Non-2xx statuses come back as
    /// values so the caller can report and continue.
    async fn create(&self, fields: &PageFields) -> SyncResult<WriteStatus>;

    /// Overwrite an existing page's fields.
    async fn update(&self, handle: &PageHandle, fields: &PageFields) -> SyncResult<WriteStatus>;
}

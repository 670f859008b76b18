//! Shared in-memory fakes for the two external collaborators.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use issuesync::domain::ports::{SourcePage, SourceTracker, StateFilter, TargetPage, TargetRecord, TargetStore};
use issuesync::{Issue, IssueState, PageFields, PageHandle, SyncError, SyncResult, WriteStatus};

/// Build an issue with sensible defaults.
pub fn issue(number: u64, title: &str, state: IssueState) -> Issue {
    Issue {
        number,
        title: Some(title.to_string()),
        url: format!("https://github.com/my-org/my-repo/issues/{number}"),
        state,
        is_pull_request: false,
    }
}

/// Build a pull-request record as GitHub's issues endpoint returns them.
pub fn pull_request(number: u64, title: &str) -> Issue {
    Issue {
        is_pull_request: true,
        ..issue(number, title, IssueState::Open)
    }
}

/// Build a target record carrying a denormalized issue number.
pub fn target_record(id: &str, number: u64) -> TargetRecord {
    TargetRecord {
        handle: PageHandle::from(id),
        number: Some(number),
    }
}

/// In-memory source tracker serving canned listing pages.
#[derive(Default)]
pub struct MockTracker {
    /// Listing pages, in order. Page n serves `pages[n - 1]`.
    pub pages: Vec<Vec<Issue>>,
    /// 1-based page number that fails, if any.
    pub fail_page: Option<u32>,
    /// Number of `list_page` calls observed.
    pub list_calls: AtomicUsize,
}

impl MockTracker {
    pub fn with_pages(pages: Vec<Vec<Issue>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing_at(pages: Vec<Vec<Issue>>, fail_page: u32) -> Self {
        Self {
            pages,
            fail_page: Some(fail_page),
            ..Self::default()
        }
    }
}

#[async_trait]
impl SourceTracker for MockTracker {
    async fn list_page(&self, _filter: StateFilter, page: u32) -> SyncResult<SourcePage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_page == Some(page) {
            return Err(SyncError::SourceFetchFailed(format!(
                "page {page} returned HTTP 502"
            )));
        }
        let idx = (page - 1) as usize;
        Ok(SourcePage {
            issues: self.pages.get(idx).cloned().unwrap_or_default(),
            next_page: (idx + 1 < self.pages.len()).then_some(page + 1),
        })
    }
}

/// In-memory target store with canned query pages and recorded writes.
pub struct MockStore {
    /// Full-listing pages, in cursor order.
    pub pages: Vec<Vec<TargetRecord>>,
    /// 0-based page index that fails, if any.
    pub fail_query_page: Option<usize>,
    /// Answers for targeted delta-mode lookups.
    pub lookup: HashMap<u64, PageHandle>,
    /// Status code returned by every create/update.
    pub write_status: u16,
    /// Number of full-listing `query_page` calls observed.
    pub query_calls: AtomicUsize,
    /// Number of `find_by_number` calls observed.
    pub find_calls: AtomicUsize,
    /// Fields of every create issued.
    pub creates: Mutex<Vec<PageFields>>,
    /// Handle and fields of every update issued.
    pub updates: Mutex<Vec<(PageHandle, PageFields)>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
            fail_query_page: None,
            lookup: HashMap::new(),
            write_status: 200,
            query_calls: AtomicUsize::new(0),
            find_calls: AtomicUsize::new(0),
            creates: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }
}

impl MockStore {
    /// A store with no pages at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store whose full listing serves the given pages.
    pub fn with_pages(pages: Vec<Vec<TargetRecord>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn created_numbers(&self) -> Vec<u64> {
        self.creates.lock().unwrap().iter().map(|f| f.number).collect()
    }

    pub fn updated_handles(&self) -> Vec<PageHandle> {
        self.updates
            .lock()
            .unwrap()
            .iter()
            .map(|(h, _)| h.clone())
            .collect()
    }
}

#[async_trait]
impl TargetStore for MockStore {
    async fn query_page(&self, cursor: Option<String>) -> SyncResult<TargetPage> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        let idx: usize = cursor.map_or(0, |c| c.parse().expect("mock cursor"));
        if self.fail_query_page == Some(idx) {
            return Err(SyncError::TargetFetchFailed(format!(
                "query page {idx} returned HTTP 500"
            )));
        }
        Ok(TargetPage {
            records: self.pages.get(idx).cloned().unwrap_or_default(),
            next_cursor: (idx + 1 < self.pages.len()).then(|| (idx + 1).to_string()),
        })
    }

    async fn find_by_number(&self, number: u64) -> SyncResult<Option<PageHandle>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lookup.get(&number).cloned())
    }

    async fn create(&self, fields: &PageFields) -> SyncResult<WriteStatus> {
        self.creates.lock().unwrap().push(fields.clone());
        Ok(WriteStatus(self.write_status))
    }

    async fn update(&self, handle: &PageHandle, fields: &PageFields) -> SyncResult<WriteStatus> {
        self.updates
            .lock()
            .unwrap()
            .push((handle.clone(), fields.clone()));
        Ok(WriteStatus(self.write_status))
    }
}

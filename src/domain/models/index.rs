//! The target index: issue number to Notion page handle.

use std::collections::HashMap;

/// Opaque handle of a Notion page, assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageHandle(pub String);

impl PageHandle {
    /// The raw page id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Point-in-time mapping from issue number to existing page handle,
/// rebuilt fresh every run.
///
/// The `complete` flag distinguishes "store is empty" from "index build
/// failed partway". An incomplete index must never be planned against:
/// numbers missing from it would all be misread as absent and mass-created
/// as duplicates.
#[derive(Debug, Clone, Default)]
pub struct TargetIndex {
    entries: HashMap<u64, PageHandle>,
    complete: bool,
}

impl TargetIndex {
    /// An index known to cover the whole store.
    pub fn complete(entries: HashMap<u64, PageHandle>) -> Self {
        Self {
            entries,
            complete: true,
        }
    }

    /// An index whose pagination ended early.
    pub fn partial(entries: HashMap<u64, PageHandle>) -> Self {
        Self {
            entries,
            complete: false,
        }
    }

    /// Look up the page handle for an issue number.
    pub fn handle_for(&self, number: u64) -> Option<&PageHandle> {
        self.entries.get(&number)
    }

    /// Whether the index saw the store's final page.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of indexed pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no pages are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Target index builder: maps issue numbers to existing page handles.

use std::collections::HashMap;

use crate::domain::models::TargetIndex;
use crate::domain::pager::{collect_pages, Page};
use crate::domain::ports::TargetStore;

/// Build the issue-number index over the whole target store.
///
/// Records without a denormalized issue number are skipped; they were not
/// created by this system and are not sync targets. When pagination fails
/// partway, the index is returned with everything gathered so far but
/// flagged incomplete, so the caller can refuse to plan creates from it
/// instead of duplicating every page the failed tail would have covered.
pub async fn build_target_index(store: &dyn TargetStore) -> TargetIndex {
    let pages = collect_pages(|cursor: Option<String>| async move {
        let page = store.query_page(cursor).await?;
        Ok(Page {
            items: page.records,
            next: page.next_cursor,
        })
    })
    .await;

    let mut entries = HashMap::new();
    let mut unkeyed = 0usize;
    for record in pages.items {
        let Some(number) = record.number else {
            unkeyed += 1;
            continue;
        };
        if let Some(previous) = entries.insert(number, record.handle) {
            // The store should hold one page per number; keep the newest
            // but make the violation visible.
            tracing::warn!(number, previous = %previous, "duplicate page for issue number");
        }
    }

    match pages.failure {
        None => {
            tracing::info!(indexed = entries.len(), unkeyed, "target index complete");
            TargetIndex::complete(entries)
        }
        Some(err) => {
            tracing::warn!(
                indexed = entries.len(),
                error = %err,
                "target index build ended early"
            );
            TargetIndex::partial(entries)
        }
    }
}

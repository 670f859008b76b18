//! Source reader: assembles the complete issue set from the tracker.

use crate::domain::models::Issue;
use crate::domain::pager::{collect_pages, Page, Pages};
use crate::domain::ports::{SourceTracker, StateFilter};

/// First page number in GitHub's listing scheme.
const FIRST_PAGE: u32 = 1;

/// Fetch every issue from the source tracker, dropping pull requests.
///
/// GitHub's issues endpoint interleaves pull requests with issues; they
/// are stripped here so nothing downstream ever plans an operation for
/// one. On a page failure the result carries the issues gathered so far
/// plus the failure; the caller must not plan writes from it.
pub async fn fetch_source_issues(
    tracker: &dyn SourceTracker,
    filter: StateFilter,
) -> Pages<Issue> {
    let mut pages = collect_pages(|cursor: Option<u32>| async move {
        let page = tracker
            .list_page(filter, cursor.unwrap_or(FIRST_PAGE))
            .await?;
        Ok(Page {
            items: page.issues,
            next: page.next_page,
        })
    })
    .await;

    let fetched = pages.items.len();
    pages.items.retain(|issue| !issue.is_pull_request);

    if let Some(err) = &pages.failure {
        tracing::warn!(
            kept = pages.items.len(),
            error = %err,
            "source listing ended early"
        );
    } else {
        tracing::info!(
            fetched,
            kept = pages.items.len(),
            "source listing complete"
        );
    }

    pages
}

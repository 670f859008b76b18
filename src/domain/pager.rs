//! Generic cursor-pagination primitive.
//!
//! Both external APIs page differently (GitHub hands out integer page
//! numbers, Notion hands out opaque string cursors), so the fetch step is
//! abstracted into a closure and the cursor is a type parameter. The pager
//! drives the closure until a page comes back without a next cursor.

use std::future::Future;

use super::errors::{SyncError, SyncResult};

/// One page of results plus the cursor for the next one, if any.
#[derive(Debug, Clone)]
pub struct Page<T, C> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Cursor of the following page; `None` on the final page.
    pub next: Option<C>,
}

/// Everything gathered by [`collect_pages`], with an explicit record of
/// whether pagination ran to the end.
///
/// On failure the items fetched before the bad page are retained, but a
/// caller must treat the set as incomplete: it never saw the final page.
#[derive(Debug)]
pub struct Pages<T> {
    /// Items from every successfully fetched page, in page order.
    pub items: Vec<T>,
    /// The error that cut pagination short, if any.
    pub failure: Option<SyncError>,
}

impl<T> Pages<T> {
    /// Whether every page was fetched.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Fetch every page of a cursor-paginated listing.
///
/// `fetch` is invoked with `None` for the first page, then with each
/// returned cursor until a page has no next cursor. Fails fast: the first
/// page error stops pagination and is surfaced in [`Pages::failure`]. No
/// retry happens here; retry policy belongs to the API client.
pub async fn collect_pages<T, C, F, Fut>(mut fetch: F) -> Pages<T>
where
    F: FnMut(Option<C>) -> Fut,
    Fut: Future<Output = SyncResult<Page<T, C>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<C> = None;

    loop {
        match fetch(cursor).await {
            Ok(page) => {
                items.extend(page.items);
                match page.next {
                    Some(next) => cursor = Some(next),
                    None => {
                        return Pages {
                            items,
                            failure: None,
                        }
                    }
                }
            }
            Err(err) => {
                return Pages {
                    items,
                    failure: Some(err),
                }
            }
        }
    }
}

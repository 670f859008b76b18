//! Notion API wire models.
//!
//! Only the slice of the database-query payload the sync needs: page ids,
//! the denormalized issue-number property, and pagination fields.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::fields::PROP_NUMBER;
use crate::domain::models::PageHandle;
use crate::domain::ports::TargetRecord;

/// Response of `POST /v1/databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDatabaseResponse {
    /// Pages in this batch.
    pub results: Vec<NotionPage>,
    /// Cursor for the next batch; only meaningful when `has_more` is set.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether another batch exists.
    #[serde(default)]
    pub has_more: bool,
}

impl QueryDatabaseResponse {
    /// The cursor to request next, or `None` on the final batch.
    ///
    /// `has_more` without a cursor leaves the rest of the store
    /// unreachable; surfacing it as a fetch failure keeps the index's
    /// completeness flag honest instead of assumed.
    pub fn continuation(&self) -> SyncResult<Option<String>> {
        match (self.has_more, &self.next_cursor) {
            (false, _) => Ok(None),
            (true, Some(cursor)) => Ok(Some(cursor.clone())),
            (true, None) => Err(SyncError::TargetFetchFailed(
                "Notion query reported more results but no next_cursor".to_string(),
            )),
        }
    }
}

/// A page row returned by a database query.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    /// Store-assigned page id.
    pub id: String,
    /// Property values keyed by property name. Only typed slices the sync
    /// reads are deserialized; everything else is ignored.
    #[serde(default)]
    pub properties: HashMap<String, NotionProperty>,
}

/// A single property value. Notion tags values by type; the sync only
/// ever reads number properties, so the other variants stay unmodeled.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionProperty {
    /// Set when the property is a number property.
    #[serde(default)]
    pub number: Option<f64>,
}

impl NotionPage {
    /// The denormalized issue number, if this page carries one.
    ///
    /// Pages without a valid `Github Number` were not created by this
    /// system and are not sync targets.
    pub fn issue_number(&self) -> Option<u64> {
        let n = self.properties.get(PROP_NUMBER)?.number?;
        if n < 0.0 || n.fract() != 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(n as u64)
    }
}

impl From<NotionPage> for TargetRecord {
    fn from(page: NotionPage) -> Self {
        let number = page.issue_number();
        Self {
            handle: PageHandle(page.id),
            number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_deserialization() {
        let json = r#"{
            "results": [
                {
                    "id": "page-1",
                    "properties": {
                        "Github Number": { "id": "ab", "type": "number", "number": 5 },
                        "Name": { "id": "cd", "type": "title" }
                    }
                }
            ],
            "next_cursor": "cur-2",
            "has_more": true
        }"#;
        let resp: QueryDatabaseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].issue_number(), Some(5));
        assert_eq!(resp.continuation().unwrap().as_deref(), Some("cur-2"));
    }

    #[test]
    fn test_final_batch_has_no_continuation() {
        let json = r#"{ "results": [], "next_cursor": null, "has_more": false }"#;
        let resp: QueryDatabaseResponse = serde_json::from_str(json).unwrap();
        assert!(resp.continuation().unwrap().is_none());
    }

    #[test]
    fn test_has_more_without_cursor_is_a_fetch_failure() {
        // Stopping here silently would report a truncated index as
        // complete, so the combination must fail the query instead.
        let json = r#"{ "results": [], "next_cursor": null, "has_more": true }"#;
        let resp: QueryDatabaseResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            resp.continuation(),
            Err(SyncError::TargetFetchFailed(_))
        ));
    }

    #[test]
    fn test_page_without_number_property() {
        let json = r#"{ "id": "page-2", "properties": { "Name": { "type": "title" } } }"#;
        let page: NotionPage = serde_json::from_str(json).unwrap();
        assert!(page.issue_number().is_none());
        let record: TargetRecord = page.into();
        assert!(record.number.is_none());
        assert_eq!(record.handle.as_str(), "page-2");
    }

    #[test]
    fn test_null_number_property() {
        let json = r#"{
            "id": "page-3",
            "properties": { "Github Number": { "type": "number", "number": null } }
        }"#;
        let page: NotionPage = serde_json::from_str(json).unwrap();
        assert!(page.issue_number().is_none());
    }

    #[test]
    fn test_fractional_number_rejected() {
        let json = r#"{
            "id": "page-4",
            "properties": { "Github Number": { "type": "number", "number": 5.5 } }
        }"#;
        let page: NotionPage = serde_json::from_str(json).unwrap();
        assert!(page.issue_number().is_none());
    }
}

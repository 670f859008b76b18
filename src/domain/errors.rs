//! Domain errors for the issue sync system.

use thiserror::Error;

/// Errors that can occur during a sync pass.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A GitHub issue listing page could not be fetched. Pagination for
    /// that listing stops; items gathered so far are kept but the pass
    /// must not plan writes from the truncated listing.
    #[error("Source fetch failed: {0}")]
    SourceFetchFailed(String),

    /// A Notion database query page could not be fetched. The target
    /// index built so far is incomplete and must not be planned against.
    #[error("Target fetch failed: {0}")]
    TargetFetchFailed(String),

    /// A create or update call failed at the transport level. Reported
    /// per record by the executor; the rest of the pass continues.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// The delta-mode issue payload could not be parsed.
    #[error("Invalid issue payload: {0}")]
    InvalidPayload(String),
}

/// Result alias used throughout the sync pipeline.
pub type SyncResult<T> = Result<T, SyncError>;

//! Domain models for the sync pass.

pub mod fields;
pub mod index;
pub mod issue;
pub mod operation;

pub use fields::{IssueStatus, PageFields};
pub use index::{PageHandle, TargetIndex};
pub use issue::{Issue, IssueState};
pub use operation::{Operation, SyncSummary, WriteStatus};

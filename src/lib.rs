//! issuesync - one-way GitHub issues to Notion database sync.
//!
//! GitHub is authoritative; the Notion database is a derived projection.
//! Each pass fetches the complete issue set and the complete set of
//! already-synced pages, then plans one create or update per issue keyed
//! on the issue number denormalized into the `Github Number` property.
//!
//! # Architecture
//!
//! - **Domain** (`domain`): errors, models, the pagination primitive, and
//!   the port traits for the two external collaborators
//! - **Services** (`services`): source reader, target index builder, the
//!   pure reconciler, and the sync service that executes plans
//! - **Adapters** (`adapters`): GitHub and Notion HTTP clients
//! - **Infrastructure** (`infrastructure`): environment configuration
//! - **CLI** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Issue, IssueState, IssueStatus, Operation, PageFields, PageHandle, SyncSummary, TargetIndex,
    WriteStatus,
};
pub use domain::pager::{collect_pages, Page, Pages};
pub use domain::ports::{SourceTracker, StateFilter, TargetStore};
pub use domain::{SyncError, SyncResult};
pub use infrastructure::config::{Config, ConfigError, ConfigLoader};
pub use services::{reconcile, SyncService};

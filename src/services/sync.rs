//! The sync service: runs a full or delta reconciliation pass.

use std::sync::Arc;

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{Issue, Operation, PageFields, SyncSummary};
use crate::domain::ports::{SourceTracker, StateFilter, TargetStore};

use super::index::build_target_index;
use super::reconciler::reconcile;
use super::source::fetch_source_issues;

/// Orchestrates one batch pass: fetch, plan, execute.
///
/// Planning never happens on incomplete data: a failed source listing or
/// a partial target index aborts the pass before any write is issued.
/// Failed writes, by contrast, are reported per record and never stop
/// the remaining operations or roll back earlier ones.
pub struct SyncService {
    tracker: Arc<dyn SourceTracker>,
    store: Arc<dyn TargetStore>,
    /// Optional project relation id written into every page.
    relation: Option<String>,
}

impl SyncService {
    /// Create a sync service over the two collaborators.
    pub fn new(
        tracker: Arc<dyn SourceTracker>,
        store: Arc<dyn TargetStore>,
        relation: Option<String>,
    ) -> Self {
        Self {
            tracker,
            store,
            relation,
        }
    }

    /// Full reconciliation: list all source issues, index the whole
    /// target store, plan, and execute.
    pub async fn run_full(&self, filter: StateFilter) -> SyncResult<SyncSummary> {
        let issues = fetch_source_issues(self.tracker.as_ref(), filter).await;
        if let Some(err) = issues.failure {
            // A truncated listing would read as "those issues vanished";
            // nothing safe can be planned from it.
            return Err(err);
        }

        let index = build_target_index(self.store.as_ref()).await;
        if !index.is_complete() {
            // Every number missing from a partial index would be planned
            // as a create, duplicating pages the unfetched tail already
            // holds. Refuse instead.
            return Err(SyncError::TargetFetchFailed(
                "target index build ended early; refusing to plan against a partial index"
                    .to_string(),
            ));
        }

        let plan = reconcile(&issues.items, &index, self.relation.as_deref());
        let creates = plan
            .iter()
            .filter(|op| matches!(op, Operation::Create { .. }))
            .count();
        tracing::info!(
            operations = plan.len(),
            creates,
            updates = plan.len() - creates,
            "plan ready"
        );

        Ok(self.execute(&plan).await)
    }

    /// Delta reconciliation: one pre-supplied issue, resolved with a
    /// targeted lookup instead of full target pagination.
    pub async fn run_delta(&self, issue: Issue) -> SyncResult<SyncSummary> {
        if issue.is_pull_request {
            tracing::info!(number = issue.number, "payload is a pull request, skipping");
            return Ok(SyncSummary::default());
        }

        let fields = PageFields::from_issue(&issue, self.relation.as_deref());
        let operation = match self.store.find_by_number(issue.number).await? {
            Some(handle) => Operation::Update {
                number: issue.number,
                handle,
                fields,
            },
            None => Operation::Create {
                number: issue.number,
                fields,
            },
        };

        Ok(self.execute(&[operation]).await)
    }

    /// Execute a plan sequentially, printing one status line per
    /// operation. Write failures are tallied, not propagated.
    async fn execute(&self, plan: &[Operation]) -> SyncSummary {
        let mut summary = SyncSummary::default();

        for operation in plan {
            let result = match operation {
                Operation::Create { fields, .. } => self.store.create(fields).await,
                Operation::Update { handle, fields, .. } => {
                    self.store.update(handle, fields).await
                }
            };

            match result {
                Ok(status) if status.is_success() => {
                    println!("[{}] #{} -> {}", operation.verb(), operation.number(), status);
                    match operation {
                        Operation::Create { .. } => summary.created += 1,
                        Operation::Update { .. } => summary.updated += 1,
                    }
                }
                Ok(status) => {
                    println!("[{}] #{} -> {}", operation.verb(), operation.number(), status);
                    tracing::warn!(
                        number = operation.number(),
                        status = status.code(),
                        "write rejected"
                    );
                    summary.failed += 1;
                }
                Err(err) => {
                    println!(
                        "[{}] #{} -> failed ({err})",
                        operation.verb(),
                        operation.number()
                    );
                    tracing::warn!(number = operation.number(), error = %err, "write failed");
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            failed = summary.failed,
            "pass finished"
        );
        summary
    }
}

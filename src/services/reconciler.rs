//! The reconciler: decides create-vs-update for every source issue.
//!
//! Planning is pure. It reads the fetched issues and the target index and
//! produces operations without touching the network, so every decision
//! path is testable without I/O.

use crate::domain::models::{Issue, Operation, PageFields, TargetIndex};

/// Plan one operation per issue: `Update` when the issue number already
/// has a page in the index, `Create` otherwise.
///
/// Pull requests are excluded. Operations come out in source iteration
/// order; each targets a distinct issue number, so no ordering between
/// them is load-bearing. The caller is responsible for only passing a
/// complete index; planning against a partial one would turn every
/// missing entry into a duplicate create.
pub fn reconcile(
    issues: &[Issue],
    index: &TargetIndex,
    relation: Option<&str>,
) -> Vec<Operation> {
    issues
        .iter()
        .filter(|issue| !issue.is_pull_request)
        .map(|issue| {
            let fields = PageFields::from_issue(issue, relation);
            match index.handle_for(issue.number) {
                Some(handle) => Operation::Update {
                    number: issue.number,
                    handle: handle.clone(),
                    fields,
                },
                None => Operation::Create {
                    number: issue.number,
                    fields,
                },
            }
        })
        .collect()
}

//! Planned write operations and their outcomes.

use super::fields::PageFields;
use super::index::PageHandle;

/// A single planned write against the target store.
///
/// Operations are a plan, not an effect: the reconciler produces them
/// without touching the network, and the sync service executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// No page carries this issue number yet; create one.
    Create {
        /// Issue number the page will denormalize.
        number: u64,
        /// Field values for the new page.
        fields: PageFields,
    },
    /// A page for this issue number exists; overwrite its fields.
    Update {
        /// Issue number the page denormalizes.
        number: u64,
        /// Handle of the existing page.
        handle: PageHandle,
        /// Replacement field values.
        fields: PageFields,
    },
}

impl Operation {
    /// The issue number this operation targets.
    pub fn number(&self) -> u64 {
        match self {
            Self::Create { number, .. } | Self::Update { number, .. } => *number,
        }
    }

    /// Verb used in the per-operation status line.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create { .. } => "CREATE",
            Self::Update { .. } => "UPDATE",
        }
    }
}

/// HTTP status returned by a create or update call.
///
/// Non-success codes are carried as values rather than errors so a failed
/// write can be reported per record without aborting the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStatus(pub u16);

impl WriteStatus {
    /// Whether the code is in the 2xx range.
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }

    /// The raw status code.
    pub fn code(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tally of an executed plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Creates that returned a 2xx status.
    pub created: usize,
    /// Updates that returned a 2xx status.
    pub updated: usize,
    /// Operations that returned non-2xx or failed at the transport level.
    pub failed: usize,
}

impl SyncSummary {
    /// Total operations executed.
    pub fn total(&self) -> usize {
        self.created + self.updated + self.failed
    }
}

//! Service layer: planning and orchestration of a sync pass.

pub mod index;
pub mod reconciler;
pub mod source;
pub mod sync;

pub use reconciler::reconcile;
pub use sync::SyncService;

//! Domain layer: pure sync logic with no I/O.

pub mod errors;
pub mod models;
pub mod pager;
pub mod ports;

pub use errors::{SyncError, SyncResult};

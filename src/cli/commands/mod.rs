//! Subcommand executors.

pub mod sync;

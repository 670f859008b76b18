//! Adapters for the external collaborators.

pub mod github;
pub mod notion;
pub mod rate_limit;

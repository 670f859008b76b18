//! GitHub source tracker adapter.

pub mod client;
pub mod models;

pub use client::GitHubClient;
pub use models::GitHubIssue;

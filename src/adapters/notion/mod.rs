//! Notion target store adapter.

pub mod client;
pub mod models;

pub use client::NotionClient;

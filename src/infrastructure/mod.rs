//! Infrastructure layer: process configuration.

pub mod config;

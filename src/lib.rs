/// Library crate entry point.
/// Exposes internal modules for integration tests.
/// Production binary uses src/main.rs.

pub mod api;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod report;

//! Watch service implementations.

/// Polling watch service backed by `notify`.
pub mod file_watch_service;

//! File change notification.
//!
//! The credential reloader never polls or subscribes to the kernel itself;
//! it hands paths and a callback to a [`WatchService`](traits::watch_service::WatchService).
//! [`FileWatchService`](structs::file_watch_service::FileWatchService) is the
//! stock implementation: a `notify` poll watcher that compares contents, so a
//! file rewritten within the same mtime granularity is still noticed.
//!
//! Callbacks run on the watcher's own thread, one event at a time.

/// Watch errors.
pub mod enums;

/// Implementation blocks for watch services.
pub mod impls;

/// Watch service implementations.
pub mod structs;

/// The watch-service contract.
pub mod traits;

/// Callback type aliases.
pub mod types;

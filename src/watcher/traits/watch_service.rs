use std::path::Path;
use crate::watcher::enums::watch_error::WatchError;
use crate::watcher::types::change_callback::ChangeCallback;

/// Invokes a callback whenever a watched path's content changes.
///
/// Delivery may be coalesced and may repeat; a callback must tolerate being
/// called for a change it has already seen.
pub trait WatchService: Send + Sync {
    /// Registers `on_change` for `path`. Several callbacks may share a path.
    fn watch(&self, path: &Path, on_change: ChangeCallback) -> Result<(), WatchError>;

    /// Drops every callback registered for `path`.
    fn unwatch(&self, path: &Path) -> Result<(), WatchError>;
}

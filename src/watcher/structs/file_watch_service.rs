use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use notify::PollWatcher;
use parking_lot::{Mutex, RwLock};
use crate::watcher::types::change_callback::ChangeCallback;

pub struct FileWatchService {
    pub(crate) interval: Duration,
    pub(crate) watcher: Mutex<PollWatcher>,
    pub(crate) callbacks: Arc<RwLock<HashMap<PathBuf, Vec<ChangeCallback>>>>,
}

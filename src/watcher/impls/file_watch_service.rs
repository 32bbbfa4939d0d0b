use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error};
use notify::{Config, Event, PollWatcher, RecursiveMode, Watcher};
use parking_lot::{Mutex, RwLock};
use crate::watcher::enums::watch_error::WatchError;
use crate::watcher::structs::file_watch_service::FileWatchService;
use crate::watcher::traits::watch_service::WatchService;
use crate::watcher::types::change_callback::ChangeCallback;

impl std::fmt::Debug for FileWatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatchService")
            .field("interval", &self.interval)
            .field("paths", &self.watched_paths())
            .finish()
    }
}

impl FileWatchService {
    /// Starts a poll watcher checking every `interval`.
    pub fn new(interval: Duration) -> Result<Self, WatchError> {
        let callbacks: Arc<RwLock<HashMap<PathBuf, Vec<ChangeCallback>>>> = Arc::new(RwLock::new(HashMap::new()));
        let dispatch_to = callbacks.clone();
        let watcher = PollWatcher::new(
            move |res: notify::Result<Event>| {
                match res {
                    Ok(event) => {
                        if event.kind.is_modify() || event.kind.is_create() {
                            Self::dispatch(&dispatch_to, &event.paths);
                        }
                    }
                    Err(e) => error!("[WATCHER] Watch error: {:?}", e),
                }
            },
            Config::default()
                .with_poll_interval(interval)
                .with_compare_contents(true),
        )
        .map_err(|e| WatchError::Backend(e.to_string()))?;
        Ok(Self {
            interval,
            watcher: Mutex::new(watcher),
            callbacks,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn watched_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.callbacks.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn key(path: &Path) -> Result<PathBuf, WatchError> {
        std::path::absolute(path).map_err(|e| WatchError::Backend(e.to_string()))
    }

    fn dispatch(callbacks: &RwLock<HashMap<PathBuf, Vec<ChangeCallback>>>, paths: &[PathBuf]) {
        for path in paths {
            let Ok(key) = Self::key(path) else {
                continue;
            };
            let targets = match callbacks.read().get(&key) {
                Some(targets) => targets.clone(),
                None => continue
            };
            debug!("[WATCHER] Change detected on {}", key.display());
            for callback in targets {
                callback(&key);
            }
        }
    }
}

impl WatchService for FileWatchService {
    fn watch(&self, path: &Path, on_change: ChangeCallback) -> Result<(), WatchError> {
        if !path.exists() {
            return Err(WatchError::PathNotFound(path.to_path_buf()));
        }
        let key = Self::key(path)?;
        // The poll thread holds its own lock while dispatching, so never call
        // into the watcher with `callbacks` locked.
        let first = !self.callbacks.read().contains_key(&key);
        if first {
            self.watcher
                .lock()
                .watch(&key, RecursiveMode::NonRecursive)
                .map_err(|e| WatchError::Backend(e.to_string()))?;
        }
        self.callbacks.write().entry(key).or_default().push(on_change);
        Ok(())
    }

    fn unwatch(&self, path: &Path) -> Result<(), WatchError> {
        let key = Self::key(path)?;
        if self.callbacks.write().remove(&key).is_none() {
            return Err(WatchError::NotWatched(path.to_path_buf()));
        }
        self.watcher
            .lock()
            .unwatch(&key)
            .map_err(|e| WatchError::Backend(e.to_string()))
    }
}

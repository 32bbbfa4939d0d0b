use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Path is not watched: {}", .0.display())]
    NotWatched(PathBuf),
    #[error("Watch backend failed: {0}")]
    Backend(String),
}

use std::path::{Path, PathBuf};
use crate::ssl::structs::environment::Environment;

impl Environment {
    pub fn new<P: Into<PathBuf>>(config_dir: P) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Relative paths are taken relative to the configuration directory, when
    /// one is set.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf()
        }
    }
}

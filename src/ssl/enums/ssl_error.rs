use std::path::PathBuf;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::ssl::enums::load_failure::LoadFailure;
use crate::watcher::enums::watch_error::WatchError;

#[derive(Debug, Error)]
pub enum SslError {
    #[error("Invalid TLS configuration: {0}")]
    Configuration(String),
    #[error("Failed to load credentials from {}: {cause}", .path.display())]
    CredentialLoad {
        path: PathBuf,
        #[source]
        cause: LoadFailure,
    },
    #[error("Failed to watch {}: {cause}", .path.display())]
    Watch {
        path: PathBuf,
        #[source]
        cause: WatchError,
    },
    #[error("Invalid settings: {0}")]
    Settings(#[from] ConfigurationError),
}

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64};
use parking_lot::{Mutex, RwLock};
use crate::ssl::structs::environment::Environment;
use crate::ssl::structs::live_credentials::LiveCredentials;
use crate::ssl::structs::source_fingerprint::SourceFingerprint;
use crate::ssl::structs::tls_configuration::TlsConfiguration;
use crate::ssl::traits::reload_listener::ReloadListener;
use crate::watcher::traits::watch_service::WatchService;

pub struct CredentialReloader {
    pub(crate) configuration: TlsConfiguration,
    pub(crate) environment: Environment,
    pub(crate) live: RwLock<Arc<LiveCredentials>>,
    pub(crate) listeners: RwLock<Vec<Arc<dyn ReloadListener>>>,
    pub(crate) rebuild_lock: Mutex<()>,
    pub(crate) rebuild_pending: AtomicBool,
    pub(crate) last_failure: Mutex<Option<SourceFingerprint>>,
    pub(crate) watched: Mutex<Vec<(Arc<dyn WatchService>, PathBuf)>>,
    pub(crate) reloads: AtomicU64,
    pub(crate) failures: AtomicU64,
}

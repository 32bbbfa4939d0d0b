use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use log::{debug, error, info, warn};
use parking_lot::{Mutex, RwLock};
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::ssl::build_credentials;
use crate::ssl::structs::credential_reloader::CredentialReloader;
use crate::ssl::structs::environment::Environment;
use crate::ssl::structs::live_credentials::LiveCredentials;
use crate::ssl::structs::signing_handle::SigningHandle;
use crate::ssl::structs::source_fingerprint::SourceFingerprint;
use crate::ssl::structs::tls_configuration::TlsConfiguration;
use crate::ssl::structs::verification_handle::VerificationHandle;
use crate::ssl::traits::reload_listener::ReloadListener;
use crate::watcher::traits::watch_service::WatchService;
use crate::watcher::types::change_callback::ChangeCallback;

impl std::fmt::Debug for CredentialReloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialReloader")
            .field("configuration", &self.configuration)
            .field("live", &self.live.read())
            .field("listeners", &self.listeners.read().len())
            .field("reloads", &self.reload_count())
            .field("failures", &self.failure_count())
            .finish()
    }
}

impl CredentialReloader {
    /// Builds the initial credentials. Any failure here is fatal: there is no
    /// previous state to fall back to.
    pub fn new(configuration: TlsConfiguration, environment: Environment) -> Result<Self, SslError> {
        let fingerprint = SourceFingerprint::of(&configuration.backing_files(&environment));
        let (signing, verification) = build_credentials(&configuration, &environment)?;
        info!(
            "[SSL] Loaded credentials: {} signing identities, {} trusted certificates",
            signing.len(),
            verification.len()
        );
        Ok(Self {
            configuration,
            environment,
            live: RwLock::new(Arc::new(LiveCredentials::new(signing, verification, fingerprint))),
            listeners: RwLock::new(Vec::new()),
            rebuild_lock: Mutex::new(()),
            rebuild_pending: AtomicBool::new(false),
            last_failure: Mutex::new(None),
            watched: Mutex::new(Vec::new()),
            reloads: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }

    pub fn configuration(&self) -> &TlsConfiguration {
        &self.configuration
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn credentials(&self) -> Arc<LiveCredentials> {
        self.live.read().clone()
    }

    pub fn signing_handle(&self) -> Arc<SigningHandle> {
        self.live.read().signing_handle()
    }

    pub fn verification_handle(&self) -> Arc<VerificationHandle> {
        self.live.read().verification_handle()
    }

    pub fn register_listener(&self, listener: Arc<dyn ReloadListener>) {
        self.listeners.write().push(listener);
    }

    pub fn reload_count(&self) -> u64 {
        self.reloads.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.watched.lock().iter().map(|(_, path)| path.clone()).collect()
    }

    /// Registers every backing file with `service`.
    ///
    /// Registration continues past a failing path; the first failure is
    /// returned once all paths were tried. Live credentials are unaffected.
    pub fn watch(self: &Arc<Self>, service: Arc<dyn WatchService>) -> Result<(), SslError> {
        let weak: Weak<CredentialReloader> = Arc::downgrade(self);
        let callback: ChangeCallback = Arc::new(move |path: &Path| {
            if let Some(reloader) = weak.upgrade() {
                reloader.on_file_changed(path);
            }
        });
        let mut first_error = None;
        for path in self.configuration.backing_files(&self.environment) {
            match service.watch(&path, callback.clone()) {
                Ok(()) => {
                    debug!("[SSL] Watching {}", path.display());
                    self.watched.lock().push((service.clone(), path));
                }
                Err(cause) => {
                    warn!("[SSL] Unable to watch {}: {}", path.display(), cause);
                    first_error.get_or_insert(SslError::Watch { path, cause });
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(())
        }
    }

    /// Releases every registration made by [`Self::watch`].
    ///
    /// A reloader that is simply dropped leaves its registrations behind;
    /// their callbacks no longer reach it and do nothing.
    pub fn unwatch(&self) {
        let watched: Vec<_> = self.watched.lock().drain(..).collect();
        for (service, path) in watched {
            if let Err(e) = service.unwatch(&path) {
                debug!("[SSL] Unable to unwatch {}: {}", path.display(), e);
            }
        }
    }

    /// Change callback entry point.
    ///
    /// At most one rebuild runs at a time. Triggers arriving during a rebuild
    /// collapse into a single follow-up rebuild, run by whichever caller holds
    /// the rebuild lock.
    pub fn on_file_changed(&self, path: &Path) {
        debug!("[SSL] Change reported for {}", path.display());
        self.rebuild_pending.store(true, Ordering::SeqCst);
        loop {
            let Some(guard) = self.rebuild_lock.try_lock() else {
                return;
            };
            if !self.rebuild_pending.swap(false, Ordering::SeqCst) {
                return;
            }
            let _ = self.rebuild(false);
            drop(guard);
            if !self.rebuild_pending.load(Ordering::SeqCst) {
                return;
            }
        }
    }

    /// Rebuilds now, even if the backing files look unchanged, and waits for
    /// any rebuild already in flight.
    pub fn reload(&self) -> Result<(), SslError> {
        let _guard = self.rebuild_lock.lock();
        self.rebuild_pending.store(false, Ordering::SeqCst);
        self.rebuild(true).map(|_| ())
    }

    /// Runs with `rebuild_lock` held. Returns whether new credentials went live.
    fn rebuild(&self, force: bool) -> Result<bool, SslError> {
        let fingerprint = SourceFingerprint::of(&self.configuration.backing_files(&self.environment));
        if !force {
            if self.live.read().fingerprint == fingerprint {
                debug!("[SSL] Backing files unchanged ({}), skipping rebuild", fingerprint);
                return Ok(false);
            }
            if self.last_failure.lock().as_ref() == Some(&fingerprint) {
                debug!("[SSL] Backing files still match the last failed attempt ({}), skipping rebuild", fingerprint);
                return Ok(false);
            }
        }

        let listeners: Vec<Arc<dyn ReloadListener>> = self.listeners.read().clone();
        match build_credentials(&self.configuration, &self.environment) {
            Ok((signing, verification)) => {
                let aliases = signing.aliases();
                let trusted = verification.len();
                let credentials = Arc::new(LiveCredentials::new(signing, verification, fingerprint));
                *self.live.write() = credentials;
                *self.last_failure.lock() = None;
                self.reloads.fetch_add(1, Ordering::Relaxed);
                info!(
                    "[SSL] Reloaded credentials: aliases {:?}, {} trusted certificates",
                    aliases,
                    trusted
                );
                for listener in listeners.iter() {
                    listener.on_reload();
                }
                Ok(true)
            }
            Err(e) => {
                *self.last_failure.lock() = Some(fingerprint);
                self.failures.fetch_add(1, Ordering::Relaxed);
                error!("[SSL] Failed to reload credentials, keeping the current ones: {}", e);
                for listener in listeners.iter() {
                    listener.on_failure(&e);
                }
                Err(e)
            }
        }
    }
}

#![allow(dead_code)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use credswap::ssl::enums::ssl_error::SslError;
use credswap::ssl::traits::reload_listener::ReloadListener;
use credswap::watcher::enums::watch_error::WatchError;
use credswap::watcher::traits::watch_service::WatchService;
use credswap::watcher::types::change_callback::ChangeCallback;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::stack::Stack;
use openssl::symm::Cipher;
use openssl::x509::X509;
use p12_keystore::{Certificate, KeyStore, KeyStoreEntry, PrivateKeyChain};
use parking_lot::Mutex;
use rcgen::{generate_simple_self_signed, CertifiedKey};
use rustls::pki_types::CertificateDer;
use tempfile::TempDir;

pub struct Identity {
    pub cert_pem: String,
    pub key_pem: String,
    pub cert_der: CertificateDer<'static>,
}

pub fn generate_identity(name: &str) -> Identity {
    let CertifiedKey { cert, signing_key } = generate_simple_self_signed(vec![format!("{name}.example.com")]).unwrap();
    Identity {
        cert_pem: cert.pem(),
        key_pem: signing_key.serialize_pem(),
        cert_der: cert.der().clone(),
    }
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Writes `name.key` and `name.crt` into `dir`.
pub fn write_pem_identity(dir: &Path, name: &str, identity: &Identity) -> (PathBuf, PathBuf) {
    let key_path = dir.join(format!("{name}.key"));
    let cert_path = dir.join(format!("{name}.crt"));
    std::fs::write(&key_path, &identity.key_pem).unwrap();
    std::fs::write(&cert_path, &identity.cert_pem).unwrap();
    (key_path, cert_path)
}

pub fn encrypted_key_pem(identity: &Identity, password: &str) -> Vec<u8> {
    let key = PKey::private_key_from_pem(identity.key_pem.as_bytes()).unwrap();
    key.private_key_to_pem_pkcs8_passphrase(Cipher::aes_256_cbc(), password.as_bytes())
        .unwrap()
}

/// A PKCS#12 container holding the identity's key and certificate under `alias`.
pub fn keystore_der(identity: &Identity, alias: &str, password: &str) -> Vec<u8> {
    let key = PKey::private_key_from_pem(identity.key_pem.as_bytes()).unwrap();
    let cert = X509::from_pem(identity.cert_pem.as_bytes()).unwrap();
    let mut builder = Pkcs12::builder();
    builder.name(alias);
    builder.pkey(&key);
    builder.cert(&cert);
    builder.build2(password).unwrap().to_der().unwrap()
}

/// A PKCS#12 container with one key entry per `(alias, identity)` pair.
pub fn multi_keystore_der(entries: &[(&str, &Identity)], password: &str) -> Vec<u8> {
    let mut keystore = KeyStore::new();
    for (alias, identity) in entries {
        let key = PKey::private_key_from_pem(identity.key_pem.as_bytes())
            .unwrap()
            .private_key_to_pkcs8()
            .unwrap();
        let cert = Certificate::from_der(identity.cert_der.as_ref()).unwrap();
        let chain = PrivateKeyChain::new(key, alias.as_bytes().to_vec(), vec![cert]);
        keystore.add_entry(*alias, KeyStoreEntry::PrivateKeyChain(chain));
    }
    keystore.writer(password).write().unwrap()
}

/// The identity's key as SEC1 `EC PRIVATE KEY`, preceded by the
/// `EC PARAMETERS` block `openssl ecparam -genkey` writes for P-256.
pub fn ec_parameters_key_pem(identity: &Identity) -> String {
    let key = PKey::private_key_from_pem(identity.key_pem.as_bytes()).unwrap();
    let sec1 = key.ec_key().unwrap().private_key_to_pem().unwrap();
    format!(
        "-----BEGIN EC PARAMETERS-----\nBggqhkjOPQMBBw==\n-----END EC PARAMETERS-----\n{}",
        String::from_utf8(sec1).unwrap()
    )
}

/// A PKCS#12 container holding only certificates.
pub fn truststore_der(identities: &[&Identity], password: &str) -> Vec<u8> {
    let mut certs = Stack::new().unwrap();
    for identity in identities {
        certs.push(X509::from_pem(identity.cert_pem.as_bytes()).unwrap()).unwrap();
    }
    let mut builder = Pkcs12::builder();
    builder.ca(certs);
    builder.build2(password).unwrap().to_der().unwrap()
}

/// Replaces `path` through a rename, so readers never see a partial file.
pub fn replace_file(path: &Path, contents: &[u8]) {
    let staging = path.with_extension("staging");
    std::fs::write(&staging, contents).unwrap();
    std::fs::rename(&staging, path).unwrap();
}

pub fn wait_until<F: Fn() -> bool>(timeout: Duration, condition: F) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    condition()
}

/// Watch service driven by the test instead of the filesystem.
#[derive(Default)]
pub struct ManualWatchService {
    callbacks: Mutex<HashMap<PathBuf, Vec<ChangeCallback>>>,
    refused: Mutex<Vec<PathBuf>>,
}

impl ManualWatchService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn refuse(&self, path: &Path) {
        self.refused.lock().push(path.to_path_buf());
    }

    pub fn watched_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.callbacks.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn trigger(&self, path: &Path) {
        let targets = self.callbacks.lock().get(path).cloned().unwrap_or_default();
        for callback in targets {
            callback(path);
        }
    }
}

impl WatchService for ManualWatchService {
    fn watch(&self, path: &Path, on_change: ChangeCallback) -> Result<(), WatchError> {
        if self.refused.lock().iter().any(|refused| refused == path) {
            return Err(WatchError::PathNotFound(path.to_path_buf()));
        }
        self.callbacks.lock().entry(path.to_path_buf()).or_default().push(on_change);
        Ok(())
    }

    fn unwatch(&self, path: &Path) -> Result<(), WatchError> {
        match self.callbacks.lock().remove(path) {
            Some(_) => Ok(()),
            None => Err(WatchError::NotWatched(path.to_path_buf()))
        }
    }
}

#[derive(Default)]
pub struct RecordingListener {
    pub reloads: AtomicUsize,
    pub failures: AtomicUsize,
    pub last_error: Mutex<Option<String>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }
}

impl ReloadListener for RecordingListener {
    fn on_reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn on_failure(&self, error: &SslError) {
        *self.last_error.lock() = Some(error.to_string());
        self.failures.fetch_add(1, Ordering::SeqCst);
    }
}

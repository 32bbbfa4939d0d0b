mod common;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use credswap::config::structs::settings::Settings;
use credswap::ssl::structs::credential_reloader::CredentialReloader;
use credswap::ssl::structs::environment::Environment;
use credswap::ssl::structs::tls_configuration::TlsConfiguration;
use credswap::watcher::structs::file_watch_service::FileWatchService;
use credswap::watcher::traits::watch_service::WatchService;
use common::*;

const POLL: Duration = Duration::from_millis(100);
const PATIENCE: Duration = Duration::from_secs(10);

#[test]
fn test_file_change_invokes_callback() {
    let dir = temp_dir();
    let file = dir.path().join("ca.pem");
    std::fs::write(&file, b"first").unwrap();

    let service = FileWatchService::new(POLL).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    service
        .watch(&file, Arc::new(move |_: &Path| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();

    std::thread::sleep(POLL * 3);
    replace_file(&file, b"second");
    assert!(wait_until(PATIENCE, || calls.load(Ordering::SeqCst) >= 1));

    service.unwatch(&file).unwrap();
    let settled = calls.load(Ordering::SeqCst);
    replace_file(&file, b"third");
    std::thread::sleep(POLL * 5);
    assert_eq!(calls.load(Ordering::SeqCst), settled);
}

#[test]
fn test_keystore_replacement_is_picked_up() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let first = generate_identity("first");
    let second = generate_identity("second");
    std::fs::write(&path, keystore_der(&first, "first", "changeme")).unwrap();

    let settings = Settings::builder()
        .put("keystore.path", path.to_string_lossy())
        .put("keystore.password", "changeme")
        .build();
    let configuration = TlsConfiguration::resolve(&settings, None).unwrap();
    let reloader = Arc::new(CredentialReloader::new(configuration, Environment::default()).unwrap());
    let listener = RecordingListener::new();
    reloader.register_listener(listener.clone());

    let service = Arc::new(FileWatchService::new(POLL).unwrap());
    reloader.watch(service.clone()).unwrap();
    assert_eq!(service.watched_paths(), vec![path.clone()]);

    std::thread::sleep(POLL * 3);
    replace_file(&path, &keystore_der(&second, "second", "changeme"));
    assert!(wait_until(PATIENCE, || reloader.signing_handle().aliases() == vec![String::from("second")]));
    assert!(listener.reloads() >= 1);

    // Poll cycles may observe the truncation more than once, but never reload it.
    std::fs::write(&path, b"").unwrap();
    assert!(wait_until(PATIENCE, || listener.failures() >= 1));
    assert_eq!(reloader.signing_handle().aliases(), vec![String::from("second")]);

    reloader.unwatch();
    assert!(service.watched_paths().is_empty());
}

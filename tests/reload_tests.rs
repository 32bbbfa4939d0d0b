mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use credswap::config::structs::settings::Settings;
use credswap::ssl::enums::ssl_error::SslError;
use credswap::ssl::structs::credential_reloader::CredentialReloader;
use credswap::ssl::structs::environment::Environment;
use credswap::ssl::structs::tls_configuration::TlsConfiguration;
use credswap::ssl::traits::reload_listener::ReloadListener;
use common::*;

mockall::mock! {
    pub Listener {}

    impl ReloadListener for Listener {
        fn on_reload(&self);
        fn on_failure(&self, error: &SslError);
    }
}

fn keystore_reloader(path: &Path) -> Arc<CredentialReloader> {
    let settings = Settings::builder()
        .put("keystore.path", path.to_string_lossy())
        .put("keystore.password", "changeme")
        .build();
    let configuration = TlsConfiguration::resolve(&settings, None).unwrap();
    Arc::new(CredentialReloader::new(configuration, Environment::default()).unwrap())
}

fn pem_reloader(key: &Path, cert: &Path, ca: &[PathBuf]) -> Arc<CredentialReloader> {
    let mut builder = Settings::builder()
        .put("key.path", key.to_string_lossy())
        .put("cert", cert.to_string_lossy());
    if !ca.is_empty() {
        builder = builder.put_list("ca", ca.iter().map(|path| path.to_string_lossy().into_owned()));
    }
    let configuration = TlsConfiguration::resolve(&builder.build(), None).unwrap();
    Arc::new(CredentialReloader::new(configuration, Environment::default()).unwrap())
}

#[test]
fn test_keystore_swap_replaces_aliases() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let first = generate_identity("first");
    let second = generate_identity("second");
    std::fs::write(&path, keystore_der(&first, "testnode", "changeme")).unwrap();

    let reloader = keystore_reloader(&path);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let mut listener = MockListener::new();
    listener.expect_on_reload().times(1).return_const(());
    listener.expect_on_failure().times(0);
    reloader.register_listener(Arc::new(listener));

    assert!(reloader.signing_handle().certified_key("testnode").is_some());

    replace_file(&path, &keystore_der(&second, "othernode", "changeme"));
    watch.trigger(&path);

    let signing = reloader.signing_handle();
    assert!(signing.certified_key("testnode").is_none());
    assert!(signing.certified_key("othernode").is_some());
    assert_eq!(reloader.reload_count(), 1);
    assert_eq!(reloader.failure_count(), 0);
}

#[test]
fn test_truncated_keystore_keeps_previous_credentials() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let identity = generate_identity("node");
    std::fs::write(&path, keystore_der(&identity, "testnode", "changeme")).unwrap();

    let reloader = keystore_reloader(&path);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let mut listener = MockListener::new();
    listener.expect_on_reload().times(0);
    listener
        .expect_on_failure()
        .withf(|error| matches!(error, SslError::CredentialLoad { .. }))
        .times(1)
        .return_const(());
    reloader.register_listener(Arc::new(listener));

    let signing_before = reloader.signing_handle();
    let verification_before = reloader.verification_handle();

    std::fs::write(&path, b"").unwrap();
    watch.trigger(&path);

    assert!(Arc::ptr_eq(&signing_before, &reloader.signing_handle()));
    assert!(Arc::ptr_eq(&verification_before, &reloader.verification_handle()));
    assert!(reloader.signing_handle().certified_key("testnode").is_some());
    assert_eq!(reloader.failure_count(), 1);
}

#[test]
fn test_repeated_trigger_on_same_broken_content_fails_once() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let identity = generate_identity("node");
    std::fs::write(&path, keystore_der(&identity, "testnode", "changeme")).unwrap();

    let reloader = keystore_reloader(&path);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let listener = RecordingListener::new();
    reloader.register_listener(listener.clone());

    std::fs::write(&path, b"garbage").unwrap();
    watch.trigger(&path);
    watch.trigger(&path);
    assert_eq!(listener.failures(), 1);
    assert_eq!(listener.reloads(), 0);
    assert!(listener.last_error.lock().as_deref().unwrap_or_default().contains("node.p12"));

    replace_file(&path, &keystore_der(&identity, "recovered", "changeme"));
    watch.trigger(&path);
    assert_eq!(listener.failures(), 1);
    assert_eq!(listener.reloads(), 1);
    assert_eq!(reloader.signing_handle().aliases(), vec![String::from("recovered")]);
}

#[test]
fn test_unchanged_files_do_not_notify() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);

    let reloader = pem_reloader(&key, &cert, &[]);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let mut listener = MockListener::new();
    listener.expect_on_reload().times(0);
    listener.expect_on_failure().times(0);
    reloader.register_listener(Arc::new(listener));

    let before = reloader.credentials();
    watch.trigger(&key);
    watch.trigger(&cert);
    std::fs::write(&cert, &identity.cert_pem).unwrap();
    watch.trigger(&cert);
    assert!(Arc::ptr_eq(&before, &reloader.credentials()));
}

#[test]
fn test_forced_reload_rebuilds_unchanged_files() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);

    let reloader = pem_reloader(&key, &cert, &[]);
    let listener = RecordingListener::new();
    reloader.register_listener(listener.clone());
    let before = reloader.credentials();

    reloader.reload().unwrap();
    assert_eq!(listener.reloads(), 1);
    let after = reloader.credentials();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.fingerprint(), after.fingerprint());
    assert_eq!(before.signing_handle().aliases(), after.signing_handle().aliases());
    assert_eq!(
        before.verification_handle().trusted_certificates(),
        after.verification_handle().trusted_certificates()
    );
}

#[test]
fn test_pem_key_rotation() {
    let dir = temp_dir();
    let first = generate_identity("first");
    let second = generate_identity("second");
    let (key, cert) = write_pem_identity(dir.path(), "node", &first);

    let reloader = pem_reloader(&key, &cert, &[]);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let listener = RecordingListener::new();
    reloader.register_listener(listener.clone());

    // Rotating the key alone leaves a mismatched pair on disk.
    replace_file(&key, second.key_pem.as_bytes());
    watch.trigger(&key);
    assert_eq!(listener.failures(), 1);
    assert_eq!(reloader.signing_handle().entry("key").unwrap().chain(), &[first.cert_der.clone()]);

    replace_file(&cert, second.cert_pem.as_bytes());
    watch.trigger(&cert);
    assert_eq!(listener.reloads(), 1);
    assert_eq!(reloader.signing_handle().entry("key").unwrap().chain(), &[second.cert_der.clone()]);
    assert!(reloader.verification_handle().is_trusted(&second.cert_der));
    assert!(!reloader.verification_handle().is_trusted(&first.cert_der));
}

#[test]
fn test_pem_trust_reload() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);
    let ca_one = generate_identity("ca-one");
    let ca_two = generate_identity("ca-two");
    let ca = dir.path().join("ca.pem");
    std::fs::write(&ca, &ca_one.cert_pem).unwrap();

    let reloader = pem_reloader(&key, &cert, &[ca.clone()]);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    assert_eq!(reloader.verification_handle().len(), 1);

    replace_file(&ca, format!("{}{}", ca_one.cert_pem, ca_two.cert_pem).as_bytes());
    watch.trigger(&ca);
    assert_eq!(reloader.verification_handle().len(), 2);
    assert!(reloader.verification_handle().is_trusted(&ca_two.cert_der));

    let random: Vec<u8> = (0..1024u32).map(|i| (i * 17 % 256) as u8).collect();
    replace_file(&ca, &random);
    watch.trigger(&ca);
    assert_eq!(reloader.verification_handle().len(), 2);
    assert_eq!(reloader.failure_count(), 1);
}

#[test]
fn test_initial_build_failure_is_fatal() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    std::fs::write(&path, b"not a keystore").unwrap();
    let settings = Settings::builder().put("keystore.path", path.to_string_lossy()).build();
    let configuration = TlsConfiguration::resolve(&settings, None).unwrap();
    let result = CredentialReloader::new(configuration, Environment::default());
    match result {
        Err(SslError::CredentialLoad { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected a load error, got {:?}", other.err()),
    }
}

#[test]
fn test_watch_registers_every_backing_file() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);
    let ca = dir.path().join("ca.pem");
    std::fs::write(&ca, &identity.cert_pem).unwrap();

    let reloader = pem_reloader(&key, &cert, &[ca.clone()]);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let mut expected = vec![key.clone(), cert.clone(), ca.clone()];
    expected.sort();
    assert_eq!(watch.watched_paths(), expected);

    reloader.unwatch();
    assert!(watch.watched_paths().is_empty());
    assert!(reloader.watched_paths().is_empty());
}

#[test]
fn test_watch_failure_is_reported_and_credentials_stay_live() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);

    let reloader = pem_reloader(&key, &cert, &[]);
    let watch = ManualWatchService::new();
    watch.refuse(&key);
    match reloader.watch(watch.clone()) {
        Err(SslError::Watch { path, .. }) => assert_eq!(path, key),
        other => panic!("expected a watch error, got {:?}", other),
    }
    assert_eq!(watch.watched_paths(), vec![cert.clone()]);
    assert_eq!(reloader.signing_handle().len(), 1);
}

#[test]
fn test_dropped_reloader_ignores_notifications() {
    let dir = temp_dir();
    let identity = generate_identity("node");
    let (key, cert) = write_pem_identity(dir.path(), "node", &identity);

    let watch = ManualWatchService::new();
    {
        let reloader = pem_reloader(&key, &cert, &[]);
        reloader.watch(watch.clone()).unwrap();
    }
    std::fs::write(&cert, b"broken").unwrap();
    watch.trigger(&cert);
}

#[test]
fn test_readers_never_observe_a_mixed_pair() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let first = generate_identity("first");
    let second = generate_identity("second");
    let first_store = keystore_der(&first, "first", "changeme");
    let second_store = keystore_der(&second, "second", "changeme");
    std::fs::write(&path, &first_store).unwrap();

    let reloader = keystore_reloader(&path);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let reloader = reloader.clone();
            let first = first.cert_der.clone();
            let second = second.cert_der.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let credentials = reloader.credentials();
                    let aliases = credentials.signing_handle().aliases();
                    let trusted = credentials.verification_handle().trusted_certificates().to_vec();
                    match aliases.as_slice() {
                        [alias] if alias == "first" => assert_eq!(trusted, vec![first.clone()]),
                        [alias] if alias == "second" => assert_eq!(trusted, vec![second.clone()]),
                        other => panic!("unexpected aliases {:?}", other),
                    }
                }
            })
        })
        .collect();

    for round in 0..20 {
        let contents = if round % 2 == 0 { &second_store } else { &first_store };
        replace_file(&path, contents);
        watch.trigger(&path);
    }
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(reloader.reload_count(), 20);
}

#[test]
fn test_concurrent_triggers_are_serialized() {
    let dir = temp_dir();
    let path = dir.path().join("node.p12");
    let first = generate_identity("first");
    let second = generate_identity("second");
    std::fs::write(&path, keystore_der(&first, "first", "changeme")).unwrap();

    let reloader = keystore_reloader(&path);
    let watch = ManualWatchService::new();
    reloader.watch(watch.clone()).unwrap();
    let listener = RecordingListener::new();
    reloader.register_listener(listener.clone());

    replace_file(&path, &keystore_der(&second, "second", "changeme"));
    let triggers: Vec<_> = (0..8)
        .map(|_| {
            let watch = watch.clone();
            let path = path.clone();
            thread::spawn(move || watch.trigger(&path))
        })
        .collect();
    for trigger in triggers {
        trigger.join().unwrap();
    }

    assert_eq!(listener.reloads(), 1);
    assert_eq!(listener.failures(), 0);
    assert_eq!(reloader.signing_handle().aliases(), vec![String::from("second")]);
}

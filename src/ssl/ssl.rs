use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use rustls::pki_types::CertificateDer;
use rustls::server::{NoServerSessionStorage, ServerSessionMemoryCache};
use crate::ssl::container;
use crate::ssl::enums::key_material_source::KeyMaterialSource;
use crate::ssl::enums::load_failure::LoadFailure;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::trust_material_source::TrustMaterialSource;
use crate::ssl::pem;
use crate::ssl::structs::credential_reloader::CredentialReloader;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::environment::Environment;
use crate::ssl::structs::key_entry::KeyEntry;
use crate::ssl::structs::signing_handle::SigningHandle;
use crate::ssl::structs::tls_configuration::TlsConfiguration;
use crate::ssl::structs::verification_handle::VerificationHandle;

pub const KEYSTORE_PATH: &str = "keystore.path";
pub const KEYSTORE_PASSWORD: &str = "keystore.password";
pub const KEYSTORE_KEY_PASSWORD: &str = "keystore.key_password";
pub const KEYSTORE_ALGORITHM: &str = "keystore.algorithm";
pub const KEY_PATH: &str = "key.path";
pub const KEY_PASSWORD: &str = "key.password";
pub const CERT: &str = "cert";
pub const TRUSTSTORE_PATH: &str = "truststore.path";
pub const TRUSTSTORE_PASSWORD: &str = "truststore.password";
pub const TRUSTSTORE_ALGORITHM: &str = "truststore.algorithm";
pub const CA: &str = "ca";
pub const INCLUDE_PLATFORM_ROOTS: &str = "include_platform_roots";
pub const PROTOCOL: &str = "protocol";
pub const SESSION_CACHE_SIZE: &str = "session.cache_size";
pub const SESSION_CACHE_TIMEOUT: &str = "session.cache_timeout";

/// Keys that pick the key source kind.
pub const KEY_KIND_KEYS: [&str; 2] = [KEY_PATH, KEYSTORE_PATH];
/// Keys that pick the trust source kind.
pub const TRUST_KIND_KEYS: [&str; 2] = [CA, TRUSTSTORE_PATH];

pub const DEFAULT_PROTOCOL: &str = "TLS";
pub const DEFAULT_SESSION_CACHE_SIZE: usize = 1000;
pub const DEFAULT_SESSION_CACHE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_ALGORITHM: &str = "PKIX";
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["PKIX", "X509", "SunX509"];

/// Alias of the single entry built from a PEM key and certificate.
pub const PEM_KEY_ALIAS: &str = "key";

/// Parses the material `configuration` points at into a signing and a
/// verification handle.
///
/// Reads the named files and nothing else; calling it twice on unchanged
/// files yields equivalent handles.
pub fn build_credentials(
    configuration: &TlsConfiguration,
    environment: &Environment,
) -> Result<(SigningHandle, VerificationHandle), SslError> {
    if configuration.key_source.is_none() && configuration.trust_source == TrustMaterialSource::DerivedFromKey {
        return Err(SslError::Configuration(String::from(
            "trust derived from the key source requires a key source",
        )));
    }
    let signing = build_signing_handle(&configuration.key_source, environment)?;
    let verification = build_verification_handle(&configuration.trust_source, &signing, environment)?;
    Ok((signing, verification))
}

pub fn build_signing_handle(
    source: &KeyMaterialSource,
    environment: &Environment,
) -> Result<SigningHandle, SslError> {
    match source {
        KeyMaterialSource::None => Ok(SigningHandle::empty()),
        KeyMaterialSource::Store { path, store_password, key_password, algorithm } => {
            let path = environment.resolve_path(path);
            container::check_algorithm(&path, algorithm)?;
            let entries = container::read_key_entries(&path, store_password, key_password)?;
            Ok(SigningHandle::new(entries))
        }
        KeyMaterialSource::Pem { key_path, key_password, cert_path } => {
            let Some(cert_path) = cert_path else {
                return Err(SslError::Configuration(format!(
                    "PEM key {} has no certificate configured",
                    key_path.display()
                )));
            };
            let key_path = environment.resolve_path(key_path);
            let cert_path = environment.resolve_path(cert_path);
            let key = pem::read_private_key(&key_path, key_password.as_deref())?;
            let chain = pem::read_certificates(&cert_path)?;
            pem::check_key_matches(&key, &chain, &cert_path)?;
            let der = pem::private_key_der(&key, &key_path)?;
            let entry = KeyEntry::new(PEM_KEY_ALIAS, chain, &der)
                .map_err(|cause| SslError::CredentialLoad { path: key_path.clone(), cause })?;
            Ok(SigningHandle::new(vec![entry]))
        }
    }
}

pub fn build_verification_handle(
    source: &TrustMaterialSource,
    signing: &SigningHandle,
    environment: &Environment,
) -> Result<VerificationHandle, SslError> {
    match source {
        TrustMaterialSource::Store { path: None, .. } => {
            Ok(VerificationHandle::new(Vec::new(), platform_roots(), true))
        }
        TrustMaterialSource::Store { path: Some(path), password, algorithm } => {
            let path = environment.resolve_path(path);
            container::check_algorithm(&path, algorithm)?;
            let trusted = container::read_trusted_certificates(&path, password.as_deref())?;
            Ok(VerificationHandle::new(trusted, Vec::new(), false))
        }
        TrustMaterialSource::Pem { ca_paths, include_platform_roots } => {
            let mut trusted = Vec::new();
            for ca_path in ca_paths {
                trusted.extend(pem::read_certificates(&environment.resolve_path(ca_path))?);
            }
            if trusted.is_empty() && !include_platform_roots {
                // Only an empty `ca` list gets here; every listed file must
                // hold a certificate.
                return Err(SslError::CredentialLoad {
                    path: environment.resolve_path(Path::new("")),
                    cause: LoadFailure::NoCertificates,
                });
            }
            let platform = if *include_platform_roots { platform_roots() } else { Vec::new() };
            Ok(VerificationHandle::new(trusted, platform, *include_platform_roots))
        }
        TrustMaterialSource::DerivedFromKey => {
            if signing.is_empty() {
                return Err(SslError::Configuration(String::from(
                    "trust derived from the key source requires a key source",
                )));
            }
            Ok(VerificationHandle::new(signing.certificates(), Vec::new(), false))
        }
    }
}

/// The operating system's trusted roots. Unreadable system stores yield
/// whatever could be loaded.
pub fn platform_roots() -> Vec<CertificateDer<'static>> {
    let loaded = rustls_native_certs::load_native_certs();
    let mut seen = HashSet::new();
    loaded
        .certs
        .into_iter()
        .filter(|cert| seen.insert(cert.as_ref().to_vec()))
        .collect()
}

/// Builds a rustls server configuration whose certificate follows the
/// reloader's live signing handle.
pub fn create_server_config(reloader: Arc<CredentialReloader>) -> Result<rustls::ServerConfig, SslError> {
    let configuration = reloader.configuration();
    let versions = configuration.protocol_versions()?;
    let session_cache_size = configuration.session_cache_size;
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut config = rustls::ServerConfig::builder_with_provider(provider)
        .with_protocol_versions(&versions)
        .map_err(|e| SslError::Configuration(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(Arc::new(DynamicCertificateResolver::new(reloader)));
    config.session_storage = match session_cache_size {
        0 => Arc::new(NoServerSessionStorage {}),
        size => ServerSessionMemoryCache::new(size)
    };
    Ok(config)
}

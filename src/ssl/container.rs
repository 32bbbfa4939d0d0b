//! PKCS#12 key and trust containers.
//!
//! Keystores are read with `p12-keystore`, which lists every key bag;
//! truststores go through openssl.

use std::path::Path;
use openssl::pkcs12::{ParsedPkcs12_2, Pkcs12};
use openssl::pkey::PKey;
use openssl::x509::X509Ref;
use p12_keystore::{KeyStore, KeyStoreEntry};
use rustls::pki_types::CertificateDer;
use crate::ssl::enums::load_failure::LoadFailure;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::store_format::StoreFormat;
use crate::ssl::pem::{check_key_matches, private_key_der};
use crate::ssl::ssl::SUPPORTED_ALGORITHMS;
use crate::ssl::structs::key_entry::KeyEntry;

fn load_error(path: &Path, cause: LoadFailure) -> SslError {
    SslError::CredentialLoad { path: path.to_path_buf(), cause }
}

fn to_der(path: &Path, cert: &X509Ref) -> Result<CertificateDer<'static>, SslError> {
    cert.to_der()
        .map(CertificateDer::from)
        .map_err(|e| load_error(path, LoadFailure::CertificateParse(e.to_string())))
}

pub fn check_algorithm(path: &Path, algorithm: &str) -> Result<(), SslError> {
    if SUPPORTED_ALGORITHMS.iter().any(|supported| supported.eq_ignore_ascii_case(algorithm)) {
        return Ok(());
    }
    Err(load_error(path, LoadFailure::UnsupportedAlgorithm(algorithm.to_string())))
}

fn check_format(path: &Path) -> Result<(), SslError> {
    match StoreFormat::from_path(path) {
        StoreFormat::Pkcs12 => Ok(()),
        other => Err(load_error(path, LoadFailure::UnsupportedFormat(other.name().to_string())))
    }
}

fn open(path: &Path, password: &str) -> Result<ParsedPkcs12_2, SslError> {
    check_format(path)?;
    let der = std::fs::read(path).map_err(|e| load_error(path, LoadFailure::Io(e)))?;
    Pkcs12::from_der(&der)
        .and_then(|container| container.parse2(password))
        .map_err(|e| load_error(path, LoadFailure::Container(e.to_string())))
}

/// Every private key entry of the container at `path`, keyed by its friendly
/// name or else the file stem.
///
/// A container that does not open with the store password is retried with
/// `key_password`.
pub fn read_key_entries(path: &Path, store_password: &str, key_password: &str) -> Result<Vec<KeyEntry>, SslError> {
    check_format(path)?;
    let der = std::fs::read(path).map_err(|e| load_error(path, LoadFailure::Io(e)))?;
    let keystore = KeyStore::from_pkcs12(&der, store_password)
        .or_else(|e| {
            if key_password != store_password {
                KeyStore::from_pkcs12(&der, key_password)
            } else {
                Err(e)
            }
        })
        .map_err(|e| load_error(path, LoadFailure::Container(e.to_string())))?;

    let mut entries = Vec::new();
    for (alias, entry) in keystore.entries() {
        let KeyStoreEntry::PrivateKeyChain(key_chain) = entry else {
            continue;
        };
        let alias = if alias.is_empty() {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from("key"))
        } else {
            alias.clone()
        };
        let chain: Vec<CertificateDer<'static>> = key_chain
            .chain()
            .iter()
            .map(|cert| CertificateDer::from(cert.as_der().to_vec()))
            .collect();
        let key = PKey::private_key_from_pkcs8(key_chain.key())
            .map_err(|e| load_error(path, LoadFailure::KeyParse(e.to_string())))?;
        check_key_matches(&key, &chain, path)?;
        let der = private_key_der(&key, path)?;
        entries.push(KeyEntry::new(&alias, chain, &der).map_err(|cause| load_error(path, cause))?);
    }
    if entries.is_empty() {
        return Err(load_error(path, LoadFailure::NoKeyEntries));
    }
    Ok(entries)
}

/// Every certificate of the container at `path`, with or without a key.
pub fn read_trusted_certificates(path: &Path, password: Option<&str>) -> Result<Vec<CertificateDer<'static>>, SslError> {
    let parsed = open(path, password.unwrap_or(""))?;
    let mut trusted = Vec::new();
    if let Some(cert) = parsed.cert {
        trusted.push(to_der(path, &cert)?);
    }
    if let Some(ca) = parsed.ca {
        for cert in ca.iter() {
            trusted.push(to_der(path, cert)?);
        }
    }
    if trusted.is_empty() {
        return Err(load_error(path, LoadFailure::NoCertificates));
    }
    Ok(trusted)
}

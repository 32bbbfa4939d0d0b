//! TLS credential management module.
//!
//! This module resolves which key and trust material a TLS endpoint uses,
//! parses it into handles rustls can work with, and keeps those handles live
//! while the files underneath them change.
//!
//! # Flow
//!
//! 1. [`TlsConfiguration::resolve`](structs::tls_configuration::TlsConfiguration::resolve)
//!    layers a profile's settings over the global ones. No I/O.
//! 2. [`build_credentials`](ssl::build_credentials) reads the keystore or PEM
//!    files and returns a [`SigningHandle`](structs::signing_handle::SigningHandle)
//!    and a [`VerificationHandle`](structs::verification_handle::VerificationHandle).
//! 3. [`CredentialReloader`](structs::credential_reloader::CredentialReloader)
//!    holds the live pair, watches the backing files and rebuilds on change.
//!    A failed rebuild keeps the previous pair and notifies listeners.
//! 4. [`DynamicCertificateResolver`](structs::dynamic_certificate_resolver::DynamicCertificateResolver)
//!    hands the live identity to every new handshake.
//!
//! # Settings
//!
//! | Key | Meaning |
//! |---|---|
//! | `keystore.path`, `keystore.password`, `keystore.key_password`, `keystore.algorithm` | PKCS#12 key container |
//! | `key.path`, `key.password`, `cert` | PEM private key and certificate chain |
//! | `truststore.path`, `truststore.password`, `truststore.algorithm` | PKCS#12 trust container |
//! | `ca` | PEM CA files (list) |
//! | `include_platform_roots` | also trust the operating system's roots |
//! | `protocol` | `TLS`, `TLSv1.3` or `TLSv1.2` |
//! | `session.cache_size`, `session.cache_timeout` | server session cache |
//!
//! # Example
//!
//! ```rust,ignore
//! use credswap::ssl::ssl::build_credentials;
//! use credswap::ssl::structs::environment::Environment;
//! use credswap::ssl::structs::tls_configuration::TlsConfiguration;
//!
//! let configuration = TlsConfiguration::resolve(&global, Some(&profile))?;
//! let (signing, verification) = build_credentials(&configuration, &Environment::default())?;
//! println!("{:?} / {} trusted", signing.aliases(), verification.len());
//! ```

/// SSL enumerations (material sources, errors).
pub mod enums;

/// Implementation blocks for SSL types.
pub mod impls;

/// SSL data structures.
pub mod structs;

/// Listener contract.
pub mod traits;

/// PEM file readers.
pub mod pem;

/// PKCS#12 container readers.
pub mod container;

/// Setting keys, defaults, credential building and rustls wiring.
#[allow(clippy::module_inception)]
pub mod ssl;

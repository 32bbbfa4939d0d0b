//! # credswap
//!
//! Reloadable TLS credentials for long-running services.
//!
//! ## Overview
//!
//! credswap resolves which private-key/certificate material and which trust
//! material a TLS-terminating service uses, parses that material into signing
//! and verification handles, and swaps freshly parsed handles in whenever the
//! backing files change on disk. Handshakes in flight keep the handles they
//! started with; a broken file after startup never takes the service down.
//!
//! ## Features
//!
//! - **Layered Configuration**: a global scope plus per-profile overrides, resolved field by field
//! - **Two Material Formats**: PKCS#12 keystores and PEM key/certificate/CA files
//! - **Hot Reload**: file changes trigger a rebuild, success swaps atomically, failure keeps the last good credentials
//! - **Listeners**: `on_reload` / `on_failure` notifications per watched configuration
//! - **rustls Integration**: a certificate resolver and server config builder reading the live handles
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use credswap::config::structs::settings::Settings;
//! use credswap::ssl::structs::credential_reloader::CredentialReloader;
//! use credswap::ssl::structs::environment::Environment;
//! use credswap::ssl::structs::tls_configuration::TlsConfiguration;
//! use credswap::watcher::structs::file_watch_service::FileWatchService;
//!
//! let settings = Settings::builder()
//!     .put("key.path", "server.key")
//!     .put("cert", "server.crt")
//!     .build();
//! let configuration = TlsConfiguration::resolve(&settings, None)?;
//! let reloader = Arc::new(CredentialReloader::new(configuration, Environment::default())?);
//! reloader.watch(Arc::new(FileWatchService::new(Duration::from_secs(5))?))?;
//! let server_config = credswap::ssl::ssl::create_server_config(reloader.clone())?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Flat settings maps and the TOML configuration file
//! - [`ssl`] - Material descriptors, credential building, reloading and rustls wiring
//! - [`structs`] - CLI argument parsing
//! - [`watcher`] - File change notification service

/// Common utilities and shared functionality.
///
/// Contains the logging setup and duration parsing used across modules.
pub mod common;

/// Configuration management module.
///
/// Flat dotted-key settings maps, TOML loading, and the binary's
/// configuration file model.
pub mod config;

/// TLS credential module.
///
/// Resolves key/trust material descriptors, builds signing and verification
/// handles from keystores or PEM files, and keeps them live across file
/// changes.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

/// File change notification.
///
/// A watch-service abstraction and a polling implementation on top of
/// `notify`.
pub mod watcher;

//! SSL data structures.

/// Fully resolved key/trust descriptor for one scope.
pub mod tls_configuration;

/// Base directory used to resolve relative material paths.
pub mod environment;

/// One private key with its certificate chain and alias.
pub mod key_entry;

/// The identities this endpoint can present during a handshake.
pub mod signing_handle;

/// The certificates trusted when validating peers.
pub mod verification_handle;

/// Content digest of every backing file of a configuration.
pub mod source_fingerprint;

/// The live handle pair of one configuration.
pub mod live_credentials;

/// Owns the live credentials of one configuration and rebuilds them on change.
pub mod credential_reloader;

/// rustls certificate resolver reading the live signing handle.
pub mod dynamic_certificate_resolver;

/// All reloaders of a configuration file, one per distinct resolved configuration.
pub mod ssl_service;

/// Listener that only logs reload outcomes.
pub mod log_reload_listener;

//! Implementation blocks for SSL types.

pub mod credential_reloader;
pub mod dynamic_certificate_resolver;
pub mod environment;
pub mod key_entry;
pub mod key_material_source;
pub mod live_credentials;
pub mod log_reload_listener;
pub mod signing_handle;
pub mod source_fingerprint;
pub mod ssl_service;
pub mod store_format;
pub mod tls_configuration;
pub mod trust_material_source;
pub mod verification_handle;

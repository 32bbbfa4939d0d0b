//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file, or to
//! the flat settings view handed to the TLS resolver.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Credential reload behaviour (enabled flag, polling interval).
pub mod reload_config;

/// Flat dotted-key settings map for one scope.
pub mod settings;

/// Builder for [`settings::Settings`].
pub mod settings_builder;

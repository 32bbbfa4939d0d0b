//! Configuration management module.
//!
//! Two layers live here. [`Settings`](structs::settings::Settings) is the flat,
//! dotted-key view that the TLS resolver consumes: one map per scope, global or
//! per-profile. [`Configuration`](structs::configuration::Configuration) is the
//! TOML file model of the `credswap` binary that carries those maps.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [reload]
//! enabled = true
//! interval = "5s"
//!
//! [tls]
//! keystore.path = "certs/node.p12"
//! keystore.password = "changeme"
//!
//! [profiles.client]
//! ca = ["certs/ca.pem"]
//! ```
//!
//! Nested tables flatten into dotted keys, so `[tls] keystore.path = "x"` and
//! `[tls] "keystore.path" = "x"` are the same setting. Arrays of strings are
//! list settings; integers and booleans are kept in their textual form.
//!
//! # Example
//!
//! ```rust,ignore
//! use credswap::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let global = &config.tls;
//! ```

/// Configuration enumerations (errors, setting values).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving and lookups.
pub mod impls;

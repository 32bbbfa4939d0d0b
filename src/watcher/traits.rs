//! Watch-service contract.

/// Registers change callbacks for paths.
pub mod watch_service;

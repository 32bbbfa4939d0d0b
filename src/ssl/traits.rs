//! SSL traits.

/// Notification contract for reload outcomes.
pub mod reload_listener;

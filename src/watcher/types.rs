//! Callback type aliases.

/// Change notification callback.
pub mod change_callback;

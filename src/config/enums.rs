//! Configuration enumerations.

/// Errors raised while loading, saving or interpreting configuration.
pub mod configuration_error;

/// A single setting value, either scalar or list.
pub mod setting_value;

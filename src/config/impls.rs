//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod reload_config;
pub mod setting_value;
pub mod settings;
pub mod settings_builder;

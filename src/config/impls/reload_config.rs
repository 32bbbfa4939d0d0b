use std::time::Duration;
use crate::common::common::{format_time_value, parse_time_value};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::reload_config::ReloadConfig;

pub const DEFAULT_RELOAD_INTERVAL: Duration = Duration::from_secs(5);

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: format_time_value(DEFAULT_RELOAD_INTERVAL),
        }
    }
}

impl ReloadConfig {
    pub fn interval(&self) -> Result<Duration, ConfigurationError> {
        match parse_time_value(&self.interval) {
            Some(interval) if !interval.is_zero() => Ok(interval),
            _ => Err(ConfigurationError::invalid("reload.interval", &self.interval, "expected a positive duration such as 5s"))
        }
    }
}

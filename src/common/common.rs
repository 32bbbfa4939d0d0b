use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            return Err(ConfigurationError::InvalidValue {
                key: String::from("log_level"),
                value: config.log_level.clone(),
                reason: String::from("expected one of off, trace, debug, info, warn, error"),
            });
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| ConfigurationError::Logging(e.to_string()))?;
    info!("logging initialized.");
    Ok(())
}

/// Parses a duration such as `500ms`, `30s`, `5m`, `24h` or `1d`.
///
/// A bare `0` is accepted and means zero. Any other unitless number is rejected.
pub fn parse_time_value(value: &str) -> Option<Duration>
{
    let value = value.trim();
    if value == "0" {
        return Some(Duration::ZERO);
    }
    let split = value.find(|c: char| !c.is_ascii_digit())?;
    let (number, unit) = value.split_at(split);
    let number: u64 = number.parse().ok()?;
    match unit.trim().to_ascii_lowercase().as_str() {
        "ms" => Some(Duration::from_millis(number)),
        "s" => Some(Duration::from_secs(number)),
        "m" => number.checked_mul(60).map(Duration::from_secs),
        "h" => number.checked_mul(60 * 60).map(Duration::from_secs),
        "d" => number.checked_mul(24 * 60 * 60).map(Duration::from_secs),
        _ => None
    }
}

/// Renders a duration in the largest unit that divides it exactly.
pub fn format_time_value(duration: Duration) -> String
{
    let millis = duration.as_millis();
    if millis == 0 {
        return String::from("0");
    }
    if millis % 1000 != 0 {
        return format!("{millis}ms");
    }
    let seconds = duration.as_secs();
    for (unit, size) in [("d", 86_400u64), ("h", 3_600), ("m", 60)] {
        if seconds % size == 0 {
            return format!("{}{}", seconds / size, unit);
        }
    }
    format!("{seconds}s")
}

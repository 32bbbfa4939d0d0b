use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::settings::Settings;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            reload: ReloadConfig::default(),
            tls: Settings::builder()
                .put("key.path", "certs/server.key")
                .put("cert", "certs/server.crt")
                .put("protocol", "TLS")
                .put("session.cache_size", "1000")
                .put("session.cache_timeout", "24h")
                .build(),
            profiles: BTreeMap::new(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    /// Loads `path`, or with `create` set, writes the defaults there and
    /// returns an error so the caller stops and lets the operator edit it.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, ConfigurationError> {
        let path = path.as_ref();
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init().to_toml()?;
                match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {}, exiting now...", path.display());
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path.display());
                        eprintln!("{e}");
                        Err(e)
                    }
                }
            }
        }
    }
}

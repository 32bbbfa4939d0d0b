#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    Logging(String),
}

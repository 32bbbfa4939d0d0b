use std::collections::BTreeMap;
use std::time::Duration;
use crate::common::common::parse_time_value;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::setting_value::SettingValue;
use crate::config::structs::settings::Settings;
use crate::config::structs::settings_builder::SettingsBuilder;

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Values may hold passwords.
        f.debug_struct("Settings")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    pub fn empty() -> Settings {
        Settings::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(SettingValue::as_single)
    }

    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.values.get(key).map(SettingValue::as_list)
    }

    /// Like [`Self::get`], but a list of several values is an error instead
    /// of reading as unset.
    pub fn get_scalar(&self, key: &str) -> Result<Option<&str>, ConfigurationError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => match value.as_single() {
                Some(single) => Ok(Some(single)),
                None => Err(ConfigurationError::invalid(
                    key,
                    &value.as_list().join(", "),
                    "expected a single value, not a list",
                ))
            }
        }
    }

    pub fn get_as_bool(&self, key: &str) -> Result<Option<bool>, ConfigurationError> {
        match self.get_scalar(key)? {
            None => Ok(None),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(ConfigurationError::invalid(key, value, "expected true or false"))
            }
        }
    }

    pub fn get_as_usize(&self, key: &str) -> Result<Option<usize>, ConfigurationError> {
        match self.get_scalar(key)? {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|_| ConfigurationError::invalid(key, value, "expected a non-negative integer"))
        }
    }

    pub fn get_as_time(&self, key: &str) -> Result<Option<Duration>, ConfigurationError> {
        match self.get_scalar(key)? {
            None => Ok(None),
            Some(value) => parse_time_value(value)
                .map(Some)
                .ok_or_else(|| ConfigurationError::invalid(key, value, "expected a duration such as 30s, 10m or 24h"))
        }
    }

    /// Entries under `prefix`, with the prefix stripped from their keys.
    pub fn by_prefix(&self, prefix: &str) -> Settings {
        let values = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), value.clone()))
            })
            .collect();
        Settings { values }
    }

    /// Splits `prefix.<name>.<rest>` entries into one [`Settings`] per `<name>`.
    pub fn groups(&self, prefix: &str) -> BTreeMap<String, Settings> {
        let mut prefix = prefix.to_string();
        if !prefix.is_empty() && !prefix.ends_with('.') {
            prefix.push('.');
        }
        let mut groups: BTreeMap<String, BTreeMap<String, SettingValue>> = BTreeMap::new();
        for (key, value) in self.values.iter() {
            let Some(rest) = key.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if let Some((name, setting)) = rest.split_once('.') {
                groups
                    .entry(name.to_string())
                    .or_default()
                    .insert(setting.to_string(), value.clone());
            }
        }
        groups
            .into_iter()
            .map(|(name, values)| (name, Settings { values }))
            .collect()
    }

    /// A copy of `self` without `keys`.
    pub fn without(&self, keys: &[&str]) -> Settings {
        keys.iter()
            .fold(Settings::builder().put_all(self), |builder, key| builder.remove(key))
            .build()
    }

    /// `self` overlaid with every entry of `overrides`.
    pub fn merged_with(&self, overrides: &Settings) -> Settings {
        Settings::builder().put_all(self).put_all(overrides).build()
    }

    fn flatten_into(
        prefix: &str,
        table: toml::Table,
        values: &mut BTreeMap<String, SettingValue>,
    ) -> Result<(), ConfigurationError> {
        for (key, value) in table {
            let key = if prefix.is_empty() { key } else { format!("{prefix}.{key}") };
            match value {
                toml::Value::Table(nested) => Self::flatten_into(&key, nested, values)?,
                toml::Value::Array(items) => {
                    let mut list = Vec::with_capacity(items.len());
                    for item in items {
                        list.push(Self::scalar(&key, item)?);
                    }
                    values.insert(key, SettingValue::List(list));
                }
                other => {
                    let scalar = Self::scalar(&key, other)?;
                    values.insert(key, SettingValue::Single(scalar));
                }
            }
        }
        Ok(())
    }

    fn scalar(key: &str, value: toml::Value) -> Result<String, ConfigurationError> {
        match value {
            toml::Value::String(value) => Ok(value),
            toml::Value::Integer(value) => Ok(value.to_string()),
            toml::Value::Float(value) => Ok(value.to_string()),
            toml::Value::Boolean(value) => Ok(value.to_string()),
            toml::Value::Datetime(value) => Ok(value.to_string()),
            other => Err(ConfigurationError::invalid(key, &other.to_string(), "nested values are not allowed inside lists"))
        }
    }
}

impl TryFrom<toml::Table> for Settings {
    type Error = ConfigurationError;

    fn try_from(table: toml::Table) -> Result<Self, Self::Error> {
        let mut values = BTreeMap::new();
        Settings::flatten_into("", table, &mut values)?;
        Ok(Settings { values })
    }
}

impl From<Settings> for toml::Table {
    fn from(settings: Settings) -> Self {
        settings
            .values
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    SettingValue::Single(value) => toml::Value::String(value),
                    SettingValue::List(values) => toml::Value::Array(values.into_iter().map(toml::Value::String).collect())
                };
                (key, value)
            })
            .collect()
    }
}

use crate::config::enums::setting_value::SettingValue;
use crate::config::structs::settings::Settings;
use crate::config::structs::settings_builder::SettingsBuilder;

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<V: Into<String>>(mut self, key: &str, value: V) -> Self {
        self.values.insert(key.to_string(), SettingValue::Single(value.into()));
        self
    }

    pub fn put_list<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.values.insert(key.to_string(), SettingValue::List(values));
        self
    }

    /// Copies every entry of `settings`, replacing keys already present.
    pub fn put_all(mut self, settings: &Settings) -> Self {
        for (key, value) in settings.values.iter() {
            self.values.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.values.remove(key);
        self
    }

    pub fn build(self) -> Settings {
        Settings { values: self.values }
    }
}

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::enums::setting_value::SettingValue;

/// Flat, immutable map of dotted setting keys for one scope.
///
/// Deserializes from any TOML table; nested tables flatten into dotted keys.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "toml::Table", into = "toml::Table")]
pub struct Settings {
    pub(crate) values: BTreeMap<String, SettingValue>,
}

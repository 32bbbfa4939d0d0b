use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::reload_config::ReloadConfig;
use crate::config::structs::settings::Settings;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub reload: ReloadConfig,
    #[serde(default)]
    pub tls: Settings,
    #[serde(default)]
    pub profiles: BTreeMap<String, Settings>
}

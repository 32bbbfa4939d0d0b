use std::collections::BTreeMap;
use crate::config::enums::setting_value::SettingValue;

#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    pub(crate) values: BTreeMap<String, SettingValue>,
}

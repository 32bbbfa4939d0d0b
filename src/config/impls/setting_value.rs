use crate::config::enums::setting_value::SettingValue;

impl SettingValue {
    /// Scalar view; a one-element list reads as its element.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            SettingValue::Single(value) => Some(value.as_str()),
            SettingValue::List(values) if values.len() == 1 => Some(values[0].as_str()),
            SettingValue::List(_) => None
        }
    }

    /// List view; a scalar reads as a one-element list.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            SettingValue::Single(value) => vec![value.clone()],
            SettingValue::List(values) => values.clone()
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Single(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Single(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(values: Vec<String>) -> Self {
        SettingValue::List(values)
    }
}

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION_NAME: &str = "Restroom";

/// Station configuration. Field names follow the persisted `settings` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "restroomName")]
    pub location_name: String,
    #[serde(rename = "requireQR", deserialize_with = "deserialize_toggle")]
    pub require_location_token: bool,
    #[serde(rename = "allowManualID", deserialize_with = "deserialize_toggle")]
    pub allow_manual_identifier: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location_name: DEFAULT_LOCATION_NAME.to_string(),
            require_location_token: false,
            allow_manual_identifier: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(
        rename = "restroomName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_name: Option<String>,
    #[serde(
        rename = "requireQR",
        default,
        deserialize_with = "deserialize_optional_toggle",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_location_token: Option<bool>,
    #[serde(
        rename = "allowManualID",
        default,
        deserialize_with = "deserialize_optional_toggle",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_manual_identifier: Option<bool>,
}

impl Settings {
    pub fn update(&mut self, patch: SettingsPatch) -> &Settings {
        if let Some(location_name) = patch.location_name {
            self.location_name = location_name;
        }
        if let Some(require) = patch.require_location_token {
            self.require_location_token = require;
        }
        if let Some(allow) = patch.allow_manual_identifier {
            self.allow_manual_identifier = allow;
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Toggle {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn coerce_toggle<E: de::Error>(toggle: Toggle) -> Result<bool, E> {
    match toggle {
        Toggle::Bool(value) => Ok(value),
        Toggle::Number(0) => Ok(false),
        Toggle::Number(1) => Ok(true),
        Toggle::Number(n) => Err(E::invalid_value(Unexpected::Signed(n), &"0 or 1")),
        Toggle::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(E::invalid_value(Unexpected::Str(&text), &"a boolean toggle")),
        },
    }
}

fn deserialize_toggle<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    coerce_toggle(Toggle::deserialize(deserializer)?)
}

fn deserialize_optional_toggle<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    Option::<Toggle>::deserialize(deserializer)?
        .map(coerce_toggle)
        .transpose()
}

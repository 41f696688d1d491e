//! Selectors, class names, labels and log level, with page overrides.
//!
//! Defaults match the markup rendered by the server. A page can override any
//! subset by embedding a JSON object in the element with id
//! [`CONFIG_ELEMENT_ID`]; fields it leaves out keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Id of the optional element whose text holds JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-chrome-config";

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub theme: ThemeConfig,
    pub message: MessageConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { log_level: "info".to_owned(), theme: ThemeConfig::default(), message: MessageConfig::default() }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override object.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] on malformed JSON, wrong field types, or
    /// unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level, `Info` when the name is not recognized.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Theme controller wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Storage key holding `"enabled"` / `"disabled"`.
    pub storage_key: String,
    /// Optional toggle control.
    pub toggle_selector: String,
    /// Element whose class set carries the dark marker.
    pub root_selector: String,
    /// Dark marker class.
    pub dark_class: String,
    /// Toggle label while the light theme is applied.
    pub dark_label: String,
    /// Toggle label while the dark theme is applied.
    pub light_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darktheme".to_owned(),
            toggle_selector: ".toggle-theme".to_owned(),
            root_selector: "body".to_owned(),
            dark_class: "dark-theme".to_owned(),
            dark_label: "dark theme".to_owned(),
            light_label: "light theme".to_owned(),
        }
    }
}

/// Message dismisser wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageConfig {
    /// Required close control.
    pub close_selector: String,
    /// Element removed on close.
    pub message_selector: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { close_selector: ".close".to_owned(), message_selector: ".message".to_owned() }
    }
}

//! Page bindings for the toggle: where the preference lives and which DOM
//! hooks it drives.
//!
//! Hosts that use the stock markup never pass a config; [`ToggleConfig::default`]
//! matches it. Custom pages pass a JSON object with any subset of fields.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::IconSet;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Id of the toggle control element.
    pub toggle_id: String,
    /// Class added to `<body>` while dark.
    pub dark_class: String,
    pub icons: IconSet,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            icons: IconSet::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON config, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] on malformed JSON, unknown fields, or
    /// a field [`ToggleConfig::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty keys, ids, classes and icon markup, and a dark class that
    /// is not a single class token.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("toggle_id", &self.toggle_id),
            ("dark_class", &self.dark_class),
            ("icons.sun", &self.icons.sun),
            ("icons.moon", &self.icons.moon),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ThemeError::Config(format!("{name} must not be empty")));
        }
        // `classList` throws on tokens containing whitespace.
        if self.dark_class.contains(|c: char| c.is_ascii_whitespace()) {
            return Err(ThemeError::Config(format!(
                "dark_class must be a single class name, got {:?}",
                self.dark_class
            )));
        }
        Ok(())
    }
}

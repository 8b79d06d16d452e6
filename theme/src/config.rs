//! Theme configuration: storage key, marker classes, and page hooks.
//!
//! Defaults match the names the stylesheet and markup expect (see
//! [`crate::consts`]). A page may override any field by passing a JSON
//! object to the `*_with_config` exports; omitted fields keep their default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DARK_CLASS, DARK_SCHEME_QUERY, LIGHT_CLASS, STORAGE_KEY, TOGGLE_BUTTON_ID};
use crate::error::ThemeError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub light_class: String,
    pub toggle_button_id: String,
    pub dark_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            light_class: LIGHT_CLASS.to_string(),
            toggle_button_id: TOGGLE_BUTTON_ID.to_string(),
            dark_scheme_query: DARK_SCHEME_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if the JSON is malformed, names an
    /// unknown field, or fails [`ThemeConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is usable and the two markers differ.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("dark_class", &self.dark_class),
            ("light_class", &self.light_class),
            ("toggle_button_id", &self.toggle_button_id),
            ("dark_scheme_query", &self.dark_scheme_query),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
        }
        for (name, value) in [("dark_class", &self.dark_class), ("light_class", &self.light_class)] {
            if value.chars().any(char::is_whitespace) {
                return Err(ThemeError::Config(format!("{name} must be a single class name")));
            }
        }
        if self.dark_class == self.light_class {
            return Err(ThemeError::Config("dark_class and light_class must differ".into()));
        }
        Ok(())
    }
}

/// Console log level for the page: everything the crate logs in debug
/// builds, warnings and info only in release builds.
#[must_use]
pub fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

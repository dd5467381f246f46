//! Engine configuration.
//!
//! ```toml
//! locale = "en"
//!
//! [delimiters]
//! before = "<li>"
//! after = "</li>"
//! ```

use crate::core::error::FormResult;
use crate::validation::collector::Delimiters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "fr";

/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Locale used to look up rule messages.
    pub locale: String,
    /// Text wrapped around each rendered error.
    pub delimiters: Delimiters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            delimiters: Delimiters::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the error delimiters.
    pub fn with_delimiters(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.delimiters = Delimiters::new(before, after);
        self
    }

    /// Parse from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml: &str) -> FormResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.delimiters, Delimiters::new("<p>", "</p>"));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_locale("en")
            .with_delimiters("<li>", "</li>");
        assert_eq!(config.locale, "en");
        assert_eq!(config.delimiters.after, "</li>");
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml("locale = \"en\"").unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.delimiters, Delimiters::default());

        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[delimiters]\nbefore = \"* \"\nafter = \"\"").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.delimiters, Delimiters::new("* ", ""));
        assert_eq!(config.locale, "fr");
    }
}

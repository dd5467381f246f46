//! Form definitions for saving and loading.
//!
//! A definition is the declarative counterpart of the engine's configuration
//! calls: the same fields, labels and chains, written as TOML or JSON.
//!
//! ```toml
//! locale = "en"
//!
//! [[fields]]
//! name = "age"
//! label = "Age"
//! rules = "numeric|less_than[60]"
//! filters = "trim"
//! ```

use crate::core::chain::Chain;
use crate::core::error::FormResult;
use crate::engine::config::EngineConfig;
use crate::validation::collector::Delimiters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable representation of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Display label, defaults to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Rule chain
    #[serde(default, skip_serializing_if = "Chain::is_empty")]
    pub rules: Chain,
    /// Filter chain
    #[serde(default, skip_serializing_if = "Chain::is_empty")]
    pub filters: Chain,
}

impl FieldDefinition {
    /// Create a definition with empty chains.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            rules: Chain::new(),
            filters: Chain::new(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the rule chain.
    pub fn with_rules(mut self, rules: Chain) -> Self {
        self.rules = rules;
        self
    }

    /// Set the filter chain.
    pub fn with_filters(mut self, filters: Chain) -> Self {
        self.filters = filters;
        self
    }

    /// Label to display, falling back to the name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Serializable representation of a complete form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Locale override for error messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Error delimiter override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<Delimiters>,
    /// Fields, in validation order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Overlay the definition's locale and delimiters on a base configuration.
    pub fn config(&self, base: EngineConfig) -> EngineConfig {
        let mut config = base;
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(delimiters) = &self.delimiters {
            config.delimiters = delimiters.clone();
        }
        config
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from TOML string.
    pub fn from_toml(toml: &str) -> FormResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a file. `.json` files are read as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }
}

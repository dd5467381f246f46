//! Message catalogs.
//!
//! A catalog maps `(rule identifier, locale)` to an error template. Templates
//! use positional placeholders: `{0}` is the field label and `{1}` the rule
//! parameter. Placeholders without a matching argument are left as written.
//!
//! Catalogs can be loaded from TOML, one table per locale:
//!
//! ```toml
//! [en]
//! required = "The {0} field is required."
//! less_than = "The {0} field must be less than {1}."
//! ```

use crate::core::error::FormResult;
use indexmap::IndexMap;
use std::path::Path;

/// Source of localized error templates.
pub trait MessageCatalog: Send + Sync {
    /// Template for a rule in a locale.
    fn template(&self, identifier: &str, locale: &str) -> Option<&str>;
}

/// Templates of one locale, keyed by rule identifier.
pub type LocaleMessages = IndexMap<String, String>;

/// A set of catalogs keyed by locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSet {
    locales: IndexMap<String, LocaleMessages>,
}

impl CatalogSet {
    /// Create an empty catalog set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog set with the built-in `en` and `fr` templates.
    pub fn with_builtins() -> Self {
        let mut set = Self::new();
        crate::messages::builtin::register_all(&mut set);
        set
    }

    /// Parse a TOML document of `[locale]` tables.
    pub fn from_toml(toml: &str) -> FormResult<Self> {
        let locales: IndexMap<String, LocaleMessages> = toml::from_str(toml)?;
        Ok(Self { locales })
    }

    /// Load a TOML catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, locale: &str, identifier: &str, template: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(identifier.to_string(), template.into());
    }

    /// Merge another set into this one. Templates from `other` win.
    pub fn merge(&mut self, other: CatalogSet) {
        for (locale, messages) in other.locales {
            self.locales.entry(locale).or_default().extend(messages);
        }
    }

    /// Merge a TOML document into this set.
    pub fn merge_toml(&mut self, toml: &str) -> FormResult<()> {
        self.merge(Self::from_toml(toml)?);
        Ok(())
    }

    /// Get all templates of a locale.
    pub fn locale(&self, locale: &str) -> Option<&LocaleMessages> {
        self.locales.get(locale)
    }

    /// Get all known locales.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(|s| s.as_str())
    }

    /// Check if a locale has any templates.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }
}

impl MessageCatalog for CatalogSet {
    fn template(&self, identifier: &str, locale: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(identifier))
            .map(|s| s.as_str())
    }
}

/// Substitute positional placeholders `{0}`, `{1}`, ... in a template.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let index = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|i| (i, close)));

        match index.and_then(|(i, close)| args.get(i).map(|arg| (arg, close))) {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

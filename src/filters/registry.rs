//! Filter registry for managing named filter functions.

use crate::core::types::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// A named filter: `(value, parameter) -> new value`.
pub type FilterFn = Arc<dyn Fn(Value, Option<&str>) -> Value + Send + Sync>;

/// Source of named filters.
///
/// The engine only ever asks for a filter by identifier; where the function
/// comes from is up to the implementation.
pub trait FilterLibraryProvider: Send + Sync {
    /// Look up a filter by identifier.
    fn resolve(&self, identifier: &str) -> Option<FilterFn>;
}

/// Registry entry containing the filter function and its description.
#[derive(Clone)]
pub struct FilterEntry {
    /// The transform.
    pub function: FilterFn,
    /// One-line description for listings.
    pub description: String,
    /// Whether this filter can be resolved.
    pub enabled: bool,
}

impl std::fmt::Debug for FilterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEntry")
            .field("description", &self.description)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Registry of named filter functions.
///
/// Identifiers are kept in registration order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: IndexMap<String, FilterEntry>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            filters: IndexMap::new(),
        }
    }

    /// Create a registry pre-populated with built-in filters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::filters::builtin::register_all(&mut registry);
        registry
    }

    /// Register a filter, replacing any filter with the same identifier.
    pub fn register<F>(&mut self, identifier: &str, description: &str, function: F)
    where
        F: Fn(Value, Option<&str>) -> Value + Send + Sync + 'static,
    {
        let entry = FilterEntry {
            function: Arc::new(function),
            description: description.to_string(),
            enabled: true,
        };

        if self.filters.insert(identifier.to_string(), entry).is_some() {
            log::debug!("Filter '{}' replaced", identifier);
        }
    }

    /// Get a registry entry.
    pub fn get_entry(&self, identifier: &str) -> Option<&FilterEntry> {
        self.filters.get(identifier)
    }

    /// Check if a filter is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.filters.contains_key(identifier)
    }

    /// Get all registered filter identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(|s| s.as_str())
    }

    /// Get all registered filters.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FilterEntry)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Enable or disable a filter.
    pub fn set_enabled(&mut self, identifier: &str, enabled: bool) -> bool {
        if let Some(entry) = self.filters.get_mut(identifier) {
            entry.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Unregister a filter.
    pub fn unregister(&mut self, identifier: &str) -> bool {
        self.filters.shift_remove(identifier).is_some()
    }

    /// Get the total number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FilterLibraryProvider for FilterRegistry {
    fn resolve(&self, identifier: &str) -> Option<FilterFn> {
        self.filters
            .get(identifier)
            .filter(|e| e.enabled)
            .map(|e| Arc::clone(&e.function))
    }
}

/// Builder for creating a customized filter registry.
pub struct FilterRegistryBuilder {
    registry: FilterRegistry,
    include_builtins: bool,
}

impl FilterRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            registry: FilterRegistry::new(),
            include_builtins: true,
        }
    }

    /// Include or exclude built-in filters.
    pub fn with_builtins(mut self, include: bool) -> Self {
        self.include_builtins = include;
        self
    }

    /// Register a custom filter. Custom filters win over built-ins of the same name.
    pub fn register<F>(mut self, identifier: &str, description: &str, function: F) -> Self
    where
        F: Fn(Value, Option<&str>) -> Value + Send + Sync + 'static,
    {
        self.registry.register(identifier, description, function);
        self
    }

    /// Build the registry.
    pub fn build(self) -> FilterRegistry {
        if !self.include_builtins {
            return self.registry;
        }

        let mut registry = FilterRegistry::with_builtins();
        for (id, entry) in self.registry.filters {
            registry.filters.insert(id, entry);
        }
        registry
    }
}

impl Default for FilterRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(value: Value, _: Option<&str>) -> Value {
        value.map_text(|s| s.to_uppercase() + "!")
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = FilterRegistry::new();
        registry.register("shout", "Shout it", shout);

        assert!(registry.contains("shout"));
        let filter = registry.resolve("shout").unwrap();
        assert_eq!(filter(Value::from("hi"), None), Value::from("HI!"));
        assert!(registry.resolve("whisper").is_none());
    }

    #[test]
    fn test_enable_disable() {
        let mut registry = FilterRegistry::new();
        registry.register("shout", "Shout it", shout);

        registry.set_enabled("shout", false);
        assert!(registry.resolve("shout").is_none());
        assert!(registry.contains("shout"));

        registry.set_enabled("shout", true);
        assert!(registry.resolve("shout").is_some());
        assert!(!registry.set_enabled("whisper", true));
    }

    #[test]
    fn test_unregister() {
        let mut registry = FilterRegistry::new();
        registry.register("shout", "Shout it", shout);
        assert!(registry.unregister("shout"));
        assert!(!registry.unregister("shout"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_builder_overrides_builtin() {
        let registry = FilterRegistryBuilder::new()
            .register("trim", "Custom trim", |v, _| v.map_text(|_| "x".to_string()))
            .build();

        assert!(registry.contains("uppercase"));
        let trim = registry.resolve("trim").unwrap();
        assert_eq!(trim(Value::from(" a "), None), Value::from("x"));
    }

    #[test]
    fn test_builder_without_builtins() {
        let registry = FilterRegistryBuilder::new()
            .with_builtins(false)
            .register("shout", "Shout it", shout)
            .build();
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["shout"]);
    }
}

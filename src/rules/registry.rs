//! Rule registry for managing named validation predicates.

use crate::core::types::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// A named rule: `(value, parameter) -> passes`.
pub type RuleFn = Arc<dyn Fn(&Value, Option<&str>) -> bool + Send + Sync>;

/// Source of named rules.
pub trait RuleLibraryProvider: Send + Sync {
    /// Look up a rule by identifier.
    fn resolve(&self, identifier: &str) -> Option<RuleFn>;
}

/// Registry entry containing the predicate and its description.
#[derive(Clone)]
pub struct RuleEntry {
    /// The predicate.
    pub predicate: RuleFn,
    /// One-line description for listings.
    pub description: String,
    /// Whether the rule expects a bracketed parameter.
    pub takes_parameter: bool,
}

impl std::fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEntry")
            .field("description", &self.description)
            .field("takes_parameter", &self.takes_parameter)
            .finish()
    }
}

/// Registry of named rules, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: IndexMap<String, RuleEntry>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Create a registry pre-populated with built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::rules::builtin::register_all(&mut registry);
        registry
    }

    /// Register a rule that takes no parameter.
    pub fn register<F>(&mut self, identifier: &str, description: &str, predicate: F)
    where
        F: Fn(&Value, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.insert(identifier, description, false, Arc::new(predicate));
    }

    /// Register a rule that expects a parameter, e.g. `less_than[60]`.
    pub fn register_parameterized<F>(&mut self, identifier: &str, description: &str, predicate: F)
    where
        F: Fn(&Value, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.insert(identifier, description, true, Arc::new(predicate));
    }

    fn insert(&mut self, identifier: &str, description: &str, takes_parameter: bool, predicate: RuleFn) {
        let entry = RuleEntry {
            predicate,
            description: description.to_string(),
            takes_parameter,
        };

        if self.rules.insert(identifier.to_string(), entry).is_some() {
            log::debug!("Rule '{}' replaced", identifier);
        }
    }

    /// Get a registry entry.
    pub fn get_entry(&self, identifier: &str) -> Option<&RuleEntry> {
        self.rules.get(identifier)
    }

    /// Check if a rule is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.rules.contains_key(identifier)
    }

    /// Get all registered rule identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }

    /// Get all registered rules.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Unregister a rule.
    pub fn unregister(&mut self, identifier: &str) -> bool {
        self.rules.shift_remove(identifier).is_some()
    }

    /// Get the total number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleLibraryProvider for RuleRegistry {
    fn resolve(&self, identifier: &str) -> Option<RuleFn> {
        self.rules.get(identifier).map(|e| Arc::clone(&e.predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = RuleRegistry::new();
        registry.register("even", "Even integers", |v, _| {
            v.as_i64().is_some_and(|i| i % 2 == 0)
        });

        let even = registry.resolve("even").unwrap();
        assert!(even(&Value::Integer(4), None));
        assert!(!even(&Value::from("3"), None));
        assert!(registry.resolve("odd").is_none());
        assert!(!registry.get_entry("even").unwrap().takes_parameter);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = RuleRegistry::new();
        registry.register("always", "Passes", |_, _| true);
        registry.register("always", "Fails", |_, _| false);

        assert_eq!(registry.len(), 1);
        assert!(!registry.resolve("always").unwrap()(&Value::Null, None));
    }

    #[test]
    fn test_builtins_listed_in_order() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.ids().next(), Some("required"));
        assert!(registry.get_entry("less_than").unwrap().takes_parameter);
    }

    #[test]
    fn test_unregister() {
        let mut registry = RuleRegistry::with_builtins();
        let before = registry.len();
        assert!(registry.unregister("numeric"));
        assert!(!registry.contains("numeric"));
        assert_eq!(registry.len(), before - 1);
        assert!(!registry.unregister("numeric"));
    }
}

//! Field registry.
//!
//! The registry owns every field of a validation session. Fields are created
//! on first reference and kept in insertion order, which is also the order in
//! which they are filtered, validated and reported.

use crate::core::field::Field;
use crate::core::types::Value;
use indexmap::IndexMap;

/// Insertion-ordered collection of fields, keyed by name.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, Field>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the field with this name, creating it with `label` if it does not exist yet.
    ///
    /// The label of an existing field is left untouched.
    pub fn get_or_create(&mut self, name: &str, label: &str) -> &mut Field {
        self.fields
            .entry(name.to_string())
            .or_insert_with(|| {
                log::trace!("Registering field '{}'", name);
                Field::new(name, label)
            })
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Get a mutable field by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Check if a field is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Iterate mutably over fields in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Get all field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }

    /// Snapshot of every field's current value, in insertion order.
    pub fn values(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().clone()))
            .collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

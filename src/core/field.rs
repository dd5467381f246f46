//! The field entity.
//!
//! A field is the unit of validation: one named input value plus the rule and
//! filter chains configured for it, and any custom rules or filters supplied
//! directly as closures.

use crate::core::chain::{Chain, ChainLink};
use crate::core::types::Value;
use std::fmt;

/// Predicate of a custom rule: `(field name, value) -> passes`.
pub type CustomRuleFn = Box<dyn Fn(&str, &Value) -> bool + Send + Sync>;

/// Transform of a custom filter: `(field name, value) -> new value`.
pub type CustomFilterFn = Box<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// A rule supplied as a closure, with its own error template.
///
/// The template is formatted with the field label as `{0}`.
pub struct CustomRule {
    predicate: CustomRuleFn,
    error_template: String,
}

impl CustomRule {
    /// Create a custom rule.
    pub fn new<F>(error_template: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            error_template: error_template.into(),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self, name: &str, value: &Value) -> bool {
        (self.predicate)(name, value)
    }

    /// Error template used when the predicate fails.
    pub fn error_template(&self) -> &str {
        &self.error_template
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("predicate", &"<fn>")
            .field("error_template", &self.error_template)
            .finish()
    }
}

/// A filter supplied as a closure.
pub struct CustomFilter {
    transform: CustomFilterFn,
}

impl CustomFilter {
    /// Create a custom filter.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&str, Value) -> Value + Send + Sync + 'static,
    {
        Self {
            transform: Box::new(transform),
        }
    }

    /// Run the transform.
    pub fn apply(&self, name: &str, value: Value) -> Value {
        (self.transform)(name, value)
    }
}

impl fmt::Debug for CustomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomFilter(<fn>)")
    }
}

/// A form field.
///
/// The name is fixed at creation and is the field's identity. Everything else
/// is mutable configuration or state.
#[derive(Debug)]
pub struct Field {
    name: String,
    label: String,
    value: Value,
    rule_chain: Chain,
    filter_chain: Chain,
    custom_rules: Vec<CustomRule>,
    custom_filters: Vec<CustomFilter>,
}

impl Field {
    /// Create a field with no value and empty chains.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: Value::Null,
            rule_chain: Chain::new(),
            filter_chain: Chain::new(),
            custom_rules: Vec::new(),
            custom_filters: Vec::new(),
        }
    }

    /// Field identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label used in error messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the current value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take_value(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }

    /// Replace the rule chain.
    pub fn set_rules(&mut self, chain: Chain) {
        self.rule_chain = chain;
    }

    /// Append one rule to the rule chain.
    pub fn add_rule(&mut self, link: ChainLink) {
        self.rule_chain.push(link);
    }

    /// Replace the filter chain.
    pub fn set_filters(&mut self, chain: Chain) {
        self.filter_chain = chain;
    }

    /// Append one filter to the filter chain.
    pub fn add_filter(&mut self, link: ChainLink) {
        self.filter_chain.push(link);
    }

    /// Register a custom rule. Custom rules run after the named chain.
    pub fn add_custom_rule(&mut self, rule: CustomRule) {
        self.custom_rules.push(rule);
    }

    /// Register a custom filter. Custom filters run after the named chain.
    pub fn add_custom_filter(&mut self, filter: CustomFilter) {
        self.custom_filters.push(filter);
    }

    /// Named rule chain.
    pub fn rule_chain(&self) -> &Chain {
        &self.rule_chain
    }

    /// Named filter chain.
    pub fn filter_chain(&self) -> &Chain {
        &self.filter_chain
    }

    /// Custom rules in registration order.
    pub fn custom_rules(&self) -> &[CustomRule] {
        &self.custom_rules
    }

    /// Custom filters in registration order.
    pub fn custom_filters(&self) -> &[CustomFilter] {
        &self.custom_filters
    }

    /// Check whether any named or custom rule is configured.
    pub fn has_rules(&self) -> bool {
        !self.rule_chain.is_empty() || !self.custom_rules.is_empty()
    }

    /// Check whether any named or custom filter is configured.
    pub fn has_filters(&self) -> bool {
        !self.filter_chain.is_empty() || !self.custom_filters.is_empty()
    }
}

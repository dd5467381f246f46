//! Validation engine implementation.
//!
//! The engine is the facade callers work with: it registers fields, takes
//! their values, runs the pipeline and exposes the collected errors.

use crate::core::chain::{Chain, ChainLink};
use crate::core::error::{FormError, FormResult};
use crate::core::field::{CustomFilter, CustomRule, Field};
use crate::core::types::Value;
use crate::engine::config::EngineConfig;
use crate::filters::registry::{FilterLibraryProvider, FilterRegistry};
use crate::form::definition::FormDefinition;
use crate::form::registry::FieldRegistry;
use crate::messages::catalog::{CatalogSet, MessageCatalog};
use crate::rules::registry::{RuleLibraryProvider, RuleRegistry};
use crate::validation::collector::{Delimiters, ErrorCollector, ErrorEntry};
use crate::validation::pipeline::ValidationPipeline;
use crate::validation::stages::StageContext;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Where a session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Fields are being registered, or the last `validate` call was aborted.
    Configuring,
    /// The last `validate` call completed.
    Validated,
}

/// One validation session.
///
/// Fields are created lazily by the configuration methods and processed in
/// the order they were first referenced. Configuring after `validate` is
/// allowed and takes effect on the next call.
pub struct ValidationEngine {
    rules: Arc<dyn RuleLibraryProvider>,
    filters: Arc<dyn FilterLibraryProvider>,
    messages: Arc<dyn MessageCatalog>,
    config: EngineConfig,
    fields: FieldRegistry,
    collector: ErrorCollector,
    pipeline: ValidationPipeline,
    state: SessionState,
    last_result: Option<bool>,
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("config", &self.config)
            .field("fields", &self.fields.len())
            .field("errors", &self.collector.len())
            .field("state", &self.state)
            .field("last_result", &self.last_result)
            .finish()
    }
}

impl ValidationEngine {
    /// Create a session over the given providers.
    pub fn new(
        rules: Arc<dyn RuleLibraryProvider>,
        filters: Arc<dyn FilterLibraryProvider>,
        messages: Arc<dyn MessageCatalog>,
        config: EngineConfig,
    ) -> Self {
        let collector = ErrorCollector::with_delimiters(config.delimiters.clone());
        Self {
            rules,
            filters,
            messages,
            config,
            fields: FieldRegistry::new(),
            collector,
            pipeline: ValidationPipeline::new(),
            state: SessionState::Configuring,
            last_result: None,
        }
    }

    /// Create a session over the built-in rule, filter and message libraries.
    pub fn with_builtins(config: EngineConfig) -> Self {
        Self::new(
            Arc::new(RuleRegistry::with_builtins()),
            Arc::new(FilterRegistry::with_builtins()),
            Arc::new(CatalogSet::with_builtins()),
            config,
        )
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the rule chain of a field, e.g. `"required|less_than[60]"`.
    pub fn set_rules(&mut self, name: &str, label: &str, rules: &str) -> FormResult<()> {
        let chain = Chain::parse(rules)?;
        self.fields.get_or_create(name, label).set_rules(chain);
        Ok(())
    }

    /// Append one rule, e.g. `"required"` or `"max_length[20]"`.
    pub fn add_rule(&mut self, name: &str, label: &str, rule: &str) -> FormResult<()> {
        let link = ChainLink::parse(rule)?;
        self.fields.get_or_create(name, label).add_rule(link);
        Ok(())
    }

    /// Register a custom rule with its own error template (`{0}` is the label).
    pub fn add_custom_rule<F>(&mut self, name: &str, label: &str, error: &str, predicate: F)
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        self.fields
            .get_or_create(name, label)
            .add_custom_rule(CustomRule::new(error, predicate));
    }

    /// Replace the filter chain of a field, e.g. `"trim|prep_url"`.
    pub fn set_filters(&mut self, name: &str, label: &str, filters: &str) -> FormResult<()> {
        let chain = Chain::parse(filters)?;
        self.fields.get_or_create(name, label).set_filters(chain);
        Ok(())
    }

    /// Append one filter.
    pub fn add_filter(&mut self, name: &str, label: &str, filter: &str) -> FormResult<()> {
        let link = ChainLink::parse(filter)?;
        self.fields.get_or_create(name, label).add_filter(link);
        Ok(())
    }

    /// Register a custom filter.
    pub fn add_custom_filter<F>(&mut self, name: &str, label: &str, transform: F)
    where
        F: Fn(&str, Value) -> Value + Send + Sync + 'static,
    {
        self.fields
            .get_or_create(name, label)
            .add_custom_filter(CustomFilter::new(transform));
    }

    /// Change the text wrapped around rendered errors.
    ///
    /// Applies to every error, including those already collected.
    pub fn set_error_delimiters(&mut self, before: impl Into<String>, after: impl Into<String>) {
        let delimiters = Delimiters::new(before, after);
        self.config.delimiters = delimiters.clone();
        self.collector.set_delimiters(delimiters);
    }

    /// Register every field of a definition.
    ///
    /// Non-empty chains replace the field's chains; empty ones leave them as
    /// they are. The definition's locale is not applied, the session locale
    /// is fixed at construction (see [`FormDefinition::config`]).
    pub fn apply_definition(&mut self, definition: &FormDefinition) {
        if let Some(delimiters) = &definition.delimiters {
            self.set_error_delimiters(delimiters.before.clone(), delimiters.after.clone());
        }
        if let Some(locale) = &definition.locale {
            if *locale != self.config.locale {
                log::warn!(
                    "Ignoring definition locale '{}', session uses '{}'",
                    locale,
                    self.config.locale
                );
            }
        }

        for def in &definition.fields {
            let field = self.fields.get_or_create(&def.name, def.display_label());
            if !def.rules.is_empty() {
                field.set_rules(def.rules.clone());
            }
            if !def.filters.is_empty() {
                field.set_filters(def.filters.clone());
            }
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Set the value of a registered field.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> FormResult<()> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_value(value);
        Ok(())
    }

    /// Assign every registered field from raw input.
    ///
    /// Fields missing from the input get `Null`; input keys that match no
    /// field are ignored.
    pub fn bind<I, K, V>(&mut self, input: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut input: HashMap<String, Value> = input
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for field in self.fields.iter_mut() {
            let value = input.remove(field.name()).unwrap_or_default();
            field.set_value(value);
        }

        if !input.is_empty() {
            log::debug!("Ignoring {} input key(s) with no registered field", input.len());
        }
    }

    /// Assign every registered field from a JSON object.
    pub fn bind_json(&mut self, input: &serde_json::Value) -> FormResult<()> {
        let object = input
            .as_object()
            .ok_or_else(|| FormError::Other("form input must be a JSON object".to_string()))?;

        let mut values = Vec::with_capacity(object.len());
        for (key, raw) in object {
            values.push((key.clone(), Value::deserialize(raw)?));
        }
        self.bind(values);
        Ok(())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn context(&self) -> StageContext<'_> {
        stage_context(&self.rules, &self.filters, &self.messages, &self.config)
    }

    /// Check that every identifier in every chain resolves.
    ///
    /// Values are not touched and no rule runs.
    pub fn preflight(&self) -> FormResult<()> {
        self.pipeline.preflight(&self.fields, &self.context())?;
        Ok(())
    }

    /// Filter and validate every field.
    ///
    /// Returns `Ok(true)` when no rule failed, `Ok(false)` when at least one
    /// did, and `Err` when the configuration is broken. Errors from a
    /// previous call are discarded first. On `Err` every value is left as it
    /// was before the call and the session goes back to
    /// [`SessionState::Configuring`].
    pub fn validate(&mut self) -> FormResult<bool> {
        self.collector.clear();

        // Borrows only the provider and config fields so the registry and
        // collector stay mutable.
        let ctx = stage_context(&self.rules, &self.filters, &self.messages, &self.config);

        // A missing message is only found mid-run, after earlier fields were filtered.
        let snapshot = self.fields.values();
        let result = self
            .pipeline
            .preflight(&self.fields, &ctx)
            .and_then(|()| self.pipeline.run(&mut self.fields, &ctx, &mut self.collector));

        match result {
            Ok(summary) => {
                log::debug!(
                    "Validated {} field(s) in {}us: {} error(s)",
                    summary.fields,
                    summary.duration_us,
                    summary.errors
                );
                self.state = SessionState::Validated;
                self.last_result = Some(summary.valid);
                Ok(summary.valid)
            }
            Err(error) => {
                log::warn!("Validation aborted: {}", error);
                for (name, value) in snapshot {
                    if let Some(field) = self.fields.get_mut(&name) {
                        field.set_value(value);
                    }
                }
                self.collector.clear();
                self.state = SessionState::Configuring;
                self.last_result = None;
                Err(error.into())
            }
        }
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Rendered errors, each wrapped in the delimiters and ended by a newline.
    pub fn errors(&self) -> String {
        self.collector.render()
    }

    /// Structured errors in processing order.
    pub fn error_entries(&self) -> &[ErrorEntry] {
        self.collector.entries()
    }

    /// Errors of one field.
    pub fn errors_for(&self, name: &str) -> Vec<&ErrorEntry> {
        self.collector
            .entries()
            .iter()
            .filter(|e| e.field == name)
            .collect()
    }

    /// The error collector.
    pub fn collector(&self) -> &ErrorCollector {
        &self.collector
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Current value of a field; the filtered value after `validate`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(Field::value)
    }

    /// Current value of every field, in field order.
    pub fn filtered_values(&self) -> IndexMap<String, Value> {
        self.fields.values()
    }

    /// All fields.
    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    /// Session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Result of the last successful `validate` call.
    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    /// Session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Locale used for rule messages.
    pub fn locale(&self) -> &str {
        &self.config.locale
    }
}

fn stage_context<'a>(
    rules: &'a Arc<dyn RuleLibraryProvider>,
    filters: &'a Arc<dyn FilterLibraryProvider>,
    messages: &'a Arc<dyn MessageCatalog>,
    config: &'a EngineConfig,
) -> StageContext<'a> {
    StageContext {
        rules: rules.as_ref(),
        filters: filters.as_ref(),
        messages: messages.as_ref(),
        locale: &config.locale,
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_builtins(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ChainError, ConfigError};
    use crate::form::definition::FieldDefinition;
    use crate::validation::collector::ErrorSource;

    fn english() -> ValidationEngine {
        ValidationEngine::with_builtins(EngineConfig::new().with_locale("en"))
    }

    #[test]
    fn test_all_valid() {
        let mut engine = english();
        engine.set_rules("prenom", "First name", "required|alpha").unwrap();
        engine.set_rules("age", "Age", "numeric|less_than[60]").unwrap();
        engine.bind([("prenom", "Tom"), ("age", "42")]);

        assert_eq!(engine.validate().unwrap(), true);
        assert!(engine.error_entries().is_empty());
        assert_eq!(engine.errors(), "");
        assert_eq!(engine.state(), SessionState::Validated);
        assert_eq!(engine.last_result(), Some(true));
    }

    #[test]
    fn test_single_parameterized_failure() {
        let mut engine = english();
        engine.set_rules("age", "Age", "numeric|less_than[60]").unwrap();
        engine.set_value("age", "70").unwrap();

        assert!(!engine.validate().unwrap());
        let entries = engine.error_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains("Age"));
        assert!(entries[0].message.contains("60"));
        assert_eq!(
            entries[0].source,
            ErrorSource::Rule {
                rule: "less_than".to_string(),
                parameter: Some("60".to_string()),
            }
        );
    }

    #[test]
    fn test_filters_run_before_rules() {
        let mut engine = english();
        engine.set_rules("nom", "Name", "required|max_length[3]").unwrap();
        engine.set_filters("nom", "Name", "trim").unwrap();
        engine.set_value("nom", "  tom  ").unwrap();

        assert!(engine.validate().unwrap());
        assert_eq!(engine.value("nom"), Some(&Value::from("tom")));
    }

    #[test]
    fn test_two_failures_two_messages() {
        let mut engine = english();
        engine.set_rules("code", "Code", "numeric|exact_length[4]").unwrap();
        engine.set_value("code", "abc").unwrap();

        assert!(!engine.validate().unwrap());
        assert_eq!(engine.errors_for("code").len(), 2);
    }

    #[test]
    fn test_same_name_same_field() {
        let mut engine = english();
        engine.set_rules("nom", "Name", "required").unwrap();
        engine.add_filter("nom", "Other label", "trim").unwrap();
        engine.add_custom_rule("nom", "Third", "{0} is taken", |_, v| v.as_str() != Some("tom"));

        assert_eq!(engine.fields().len(), 1);
        let field = engine.field("nom").unwrap();
        assert_eq!(field.label(), "Name");
        assert_eq!(field.rule_chain().to_string(), "required");
        assert_eq!(field.filter_chain().to_string(), "trim");
        assert_eq!(field.custom_rules().len(), 1);
    }

    #[test]
    fn test_add_rule_appends_parameterized() {
        let mut engine = english();
        engine.add_rule("age", "Age", "numeric").unwrap();
        engine.add_rule("age", "Age", "greater_than[17]").unwrap();
        assert_eq!(
            engine.field("age").unwrap().rule_chain().to_string(),
            "numeric|greater_than[17]"
        );
        assert!(matches!(
            engine.add_rule("age", "Age", "required|numeric"),
            Err(FormError::Chain(ChainError::InvalidIdentifier { .. }))
        ));
    }

    #[test]
    fn test_malformed_chain_creates_no_field() {
        let mut engine = english();
        let err = engine.set_rules("age", "Age", "less_than[60").unwrap_err();
        assert!(matches!(err, FormError::Chain(ChainError::UnclosedParameter { .. })));
        assert!(engine.field("age").is_none());
    }

    #[test]
    fn test_unresolved_rule_is_fatal_not_a_failure() {
        let mut engine = english();
        engine.set_rules("a", "A", "required").unwrap();
        engine.set_rules("b", "B", "older_than[3]").unwrap();

        let err = engine.validate().unwrap_err();
        assert!(matches!(
            err,
            FormError::Config(ConfigError::UnresolvedRule { ref rule, .. }) if rule == "older_than"
        ));
        assert!(engine.error_entries().is_empty());
        assert_eq!(engine.last_result(), None);
        assert_eq!(engine.state(), SessionState::Configuring);
        assert!(engine.preflight().is_err());
    }

    #[test]
    fn test_aborted_validation_leaves_values_untouched() {
        let mut engine = english();
        engine.add_custom_filter("a", "A", |_, v| v.map_text(|s| s + "!"));
        engine.set_rules("b", "B", "nope").unwrap();
        engine.set_value("a", "x").unwrap();

        assert!(engine.validate().is_err());
        assert!(engine.validate().is_err());
        assert_eq!(engine.value("a"), Some(&Value::from("x")));
    }

    #[test]
    fn test_missing_message_restores_values() {
        let mut engine = ValidationEngine::new(
            Arc::new(RuleRegistry::with_builtins()),
            Arc::new(FilterRegistry::with_builtins()),
            Arc::new(CatalogSet::new()),
            EngineConfig::new().with_locale("en"),
        );
        engine.set_filters("a", "A", "trim").unwrap();
        engine.set_rules("b", "B", "required").unwrap();
        engine.set_value("a", "  x  ").unwrap();

        assert!(matches!(
            engine.validate(),
            Err(FormError::Config(ConfigError::MissingMessage { .. }))
        ));
        assert_eq!(engine.value("a"), Some(&Value::from("  x  ")));
        assert!(engine.error_entries().is_empty());
    }

    #[test]
    fn test_abort_after_success_resets_state() {
        let mut engine = english();
        engine.set_rules("a", "A", "required").unwrap();
        engine.set_value("a", "x").unwrap();
        assert!(engine.validate().unwrap());
        assert_eq!(engine.state(), SessionState::Validated);

        engine.add_rule("a", "A", "nope").unwrap();
        assert!(engine.validate().is_err());
        assert_eq!(engine.state(), SessionState::Configuring);
        assert_eq!(engine.last_result(), None);
    }

    #[test]
    fn test_regex_match_through_chain() {
        let mut engine = english();
        engine.set_rules("code", "Code", r"regex_match[\d{3}-\w+]").unwrap();
        engine.set_value("code", "123-abc").unwrap();
        assert!(engine.validate().unwrap());

        engine.set_value("code", "12-abc").unwrap();
        assert!(!engine.validate().unwrap());
        assert_eq!(engine.errors_for("code").len(), 1);

        // The parameter ends at the first `]`, so character classes cannot be written.
        assert!(matches!(
            engine.set_rules("zip", "Zip", "regex_match[[0-9]+]"),
            Err(FormError::Chain(ChainError::TrailingCharacters { .. }))
        ));
    }

    #[test]
    fn test_unresolved_filter_is_fatal() {
        let mut engine = english();
        engine.set_filters("a", "A", "sparkle").unwrap();
        assert!(matches!(
            engine.validate(),
            Err(FormError::Config(ConfigError::UnresolvedFilter { .. }))
        ));
    }

    #[test]
    fn test_custom_filter_scenario() {
        let mut engine = english();
        engine.add_filter("nom", "Nom", "trim").unwrap();
        engine.add_custom_filter("nom", "Nom", |_, v| v.map_text(|s| s.replace('o', "0")));
        engine.set_value("nom", "  tom  ").unwrap();

        assert!(engine.validate().unwrap());
        assert_eq!(engine.value("nom"), Some(&Value::from("t0m")));
    }

    #[test]
    fn test_custom_rule_independent_of_named_rules() {
        let mut engine = ValidationEngine::default();
        engine.set_rules("age", "Âge", "numeric|less_than[60]").unwrap();
        engine.add_custom_rule("age", "Âge", "{0} : tu dois être majeur !", |_, v| {
            v.as_f64().is_some_and(|n| n >= 18.0)
        });
        engine.set_value("age", 15).unwrap();

        assert!(!engine.validate().unwrap());
        assert_eq!(engine.errors(), "<p>Âge : tu dois être majeur !</p>\n");
    }

    #[test]
    fn test_legacy_form_scenario() {
        let mut engine = ValidationEngine::default();
        engine.set_rules("prenom", "Prénom", "required").unwrap();
        engine.set_rules("age", "Âge", "numeric|less_than[60]").unwrap();
        engine.set_filters("nom", "Nom", "encode_php_tags").unwrap();
        engine.add_rule("nom", "Nom", "required").unwrap();
        engine.add_custom_rule("age", "Âge", "Tu dois être majeur !", |_, v| {
            v.as_f64().is_some_and(|n| n >= 18.0)
        });
        engine.add_filter("nom", "Nom", "trim").unwrap();
        engine.add_custom_filter("nom", "Nom", |_, v| v.map_text(|s| s.replace('o', "0")));

        engine.bind([("prenom", ""), ("age", "15"), ("nom", "  <?tom?>  ")]);

        assert!(!engine.validate().unwrap());
        assert_eq!(
            engine.errors(),
            "<p>Le champ Prénom est requis.</p>\n<p>Tu dois être majeur !</p>\n"
        );
        assert_eq!(engine.value("nom"), Some(&Value::from("&lt;?t0m?&gt;")));
    }

    #[test]
    fn test_error_order_follows_first_reference() {
        let mut engine = english();
        engine.set_rules("b", "B", "required").unwrap();
        engine.set_rules("a", "A", "required").unwrap();
        engine.add_rule("b", "B", "numeric").unwrap();

        assert!(!engine.validate().unwrap());
        let fields: Vec<&str> = engine.error_entries().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["b", "b", "a"]);
    }

    #[test]
    fn test_delimiters_apply_at_render() {
        let mut engine = english();
        engine.set_rules("a", "A", "required").unwrap();
        engine.validate().unwrap();
        engine.set_error_delimiters("<li>", "</li>");

        assert_eq!(engine.errors(), "<li>The A field is required.</li>\n");
        assert_eq!(engine.config().delimiters.before, "<li>");
    }

    #[test]
    fn test_revalidation_replaces_errors() {
        let mut engine = english();
        engine.set_rules("a", "A", "required").unwrap();
        assert!(!engine.validate().unwrap());
        assert!(!engine.validate().unwrap());
        assert_eq!(engine.error_entries().len(), 1);

        engine.set_value("a", "x").unwrap();
        assert!(engine.validate().unwrap());
        assert!(engine.error_entries().is_empty());
    }

    #[test]
    fn test_configuration_after_validation_is_not_retroactive() {
        let mut engine = english();
        engine.set_rules("a", "A", "required").unwrap();
        engine.set_value("a", "x").unwrap();
        assert!(engine.validate().unwrap());

        engine.add_rule("a", "A", "numeric").unwrap();
        assert_eq!(engine.last_result(), Some(true));
        assert!(!engine.validate().unwrap());
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut engine = english();
        assert!(matches!(
            engine.set_value("ghost", 1),
            Err(FormError::UnknownField(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_bind_json() {
        let mut engine = english();
        engine.set_rules("age", "Age", "integer").unwrap();
        engine.set_rules("tags", "Tags", "required").unwrap();
        engine.set_rules("nom", "Name", "required").unwrap();

        let input = serde_json::json!({"age": 30, "tags": ["a", "b"], "extra": true});
        engine.bind_json(&input).unwrap();

        assert_eq!(engine.value("age"), Some(&Value::Integer(30)));
        assert_eq!(engine.value("nom"), Some(&Value::Null));
        assert!(!engine.validate().unwrap());
        assert_eq!(engine.error_entries().len(), 1);

        assert!(engine.bind_json(&serde_json::json!([1, 2])).is_err());
        assert!(matches!(
            engine.bind_json(&serde_json::json!({"age": {"nested": 1}})),
            Err(FormError::Json(_))
        ));
    }

    #[test]
    fn test_apply_definition() {
        let definition = FormDefinition::from_toml(
            r#"
[delimiters]
before = "- "
after = ""

[[fields]]
name = "email"
label = "E-mail"
rules = "required|valid_email"
filters = "trim|lowercase"
"#,
        )
        .unwrap();

        let mut engine = english();
        engine.add_custom_rule("email", "Mail", "{0} is banned", |_, v| {
            v.as_str() != Some("root@example.com")
        });
        engine.apply_definition(&definition);
        engine.bind([("email", " ROOT@Example.com ")]);

        assert!(!engine.validate().unwrap());
        assert_eq!(engine.errors(), "- Mail is banned\n");
        assert_eq!(engine.value("email"), Some(&Value::from("root@example.com")));

        let extra = FormDefinition::new().with_field(FieldDefinition::new("email"));
        engine.apply_definition(&extra);
        assert_eq!(
            engine.field("email").unwrap().rule_chain().to_string(),
            "required|valid_email"
        );
    }

    #[test]
    fn test_custom_providers() {
        let mut rules = RuleRegistry::new();
        rules.register("even", "Even numbers", |v, _| v.as_i64().is_some_and(|i| i % 2 == 0));
        let mut messages = CatalogSet::new();
        messages.insert("xx", "even", "{0}: even please");

        let mut engine = ValidationEngine::new(
            Arc::new(rules),
            Arc::new(FilterRegistry::new()),
            Arc::new(messages),
            EngineConfig::new().with_locale("xx").with_delimiters("", ""),
        );
        engine.set_rules("n", "N", "even").unwrap();
        engine.set_value("n", 3).unwrap();

        assert!(!engine.validate().unwrap());
        assert_eq!(engine.errors(), "N: even please\n");
        assert_eq!(engine.locale(), "xx");
    }
}

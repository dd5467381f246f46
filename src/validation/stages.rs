//! Per-field processing stages.
//!
//! Each stage handles one half of a field's configuration: [`FilterStage`]
//! rewrites the value, [`RuleStage`] judges it.

use crate::core::chain::ChainLink;
use crate::core::error::{ConfigError, ConfigResult};
use crate::core::field::Field;
use crate::filters::registry::{FilterFn, FilterLibraryProvider};
use crate::messages::catalog::{format_template, MessageCatalog};
use crate::rules::registry::{RuleFn, RuleLibraryProvider};
use crate::validation::collector::ErrorEntry;

/// Everything a stage needs besides the field itself.
#[derive(Clone, Copy)]
pub struct StageContext<'a> {
    /// Named rules
    pub rules: &'a dyn RuleLibraryProvider,
    /// Named filters
    pub filters: &'a dyn FilterLibraryProvider,
    /// Rule error templates
    pub messages: &'a dyn MessageCatalog,
    /// Locale used to pick templates
    pub locale: &'a str,
}

impl<'a> StageContext<'a> {
    fn resolve_filter(&self, field: &Field, link: &ChainLink) -> ConfigResult<FilterFn> {
        self.filters
            .resolve(&link.identifier)
            .ok_or_else(|| ConfigError::UnresolvedFilter {
                field: field.name().to_string(),
                filter: link.identifier.clone(),
            })
    }

    fn resolve_rule(&self, field: &Field, link: &ChainLink) -> ConfigResult<RuleFn> {
        self.rules
            .resolve(&link.identifier)
            .ok_or_else(|| ConfigError::UnresolvedRule {
                field: field.name().to_string(),
                rule: link.identifier.clone(),
            })
    }

    fn template(&self, rule: &str) -> ConfigResult<&'a str> {
        self.messages
            .template(rule, self.locale)
            .ok_or_else(|| ConfigError::MissingMessage {
                rule: rule.to_string(),
                locale: self.locale.to_string(),
            })
    }
}

/// Trait for per-field stages.
pub trait FieldStage: Send + Sync {
    /// Name of this stage.
    fn name(&self) -> &str;

    /// Check that everything the field references can be resolved.
    fn preflight(&self, field: &Field, ctx: &StageContext<'_>) -> ConfigResult<()>;

    /// Process the field.
    ///
    /// Returns the validation failures, or a configuration error that must
    /// abort the run.
    fn apply(&self, field: &mut Field, ctx: &StageContext<'_>) -> ConfigResult<Vec<ErrorEntry>>;
}

/// Filter stage - rewrites the field value.
///
/// Named filters run left to right, then custom filters in registration
/// order. Each one receives the output of the previous one.
pub struct FilterStage;

impl FieldStage for FilterStage {
    fn name(&self) -> &str {
        "Filters"
    }

    fn preflight(&self, field: &Field, ctx: &StageContext<'_>) -> ConfigResult<()> {
        for link in field.filter_chain() {
            ctx.resolve_filter(field, link)?;
        }
        Ok(())
    }

    fn apply(&self, field: &mut Field, ctx: &StageContext<'_>) -> ConfigResult<Vec<ErrorEntry>> {
        if !field.has_filters() {
            return Ok(Vec::new());
        }

        // Resolve everything up front so a bad chain leaves the value untouched.
        let resolved = field
            .filter_chain()
            .iter()
            .map(|link| Ok((ctx.resolve_filter(field, link)?, link.parameter.clone())))
            .collect::<ConfigResult<Vec<_>>>()?;

        let mut value = field.take_value();
        for (filter, parameter) in &resolved {
            value = filter(value, parameter.as_deref());
        }
        for custom in field.custom_filters() {
            value = custom.apply(field.name(), value);
        }

        log::trace!("Field '{}' filtered to {:?}", field.name(), value);
        field.set_value(value);
        Ok(Vec::new())
    }
}

/// Rule stage - evaluates every rule against the filtered value.
///
/// Evaluation never stops at the first failure: every named rule and then
/// every custom rule runs, and each failure yields one entry.
pub struct RuleStage;

impl FieldStage for RuleStage {
    fn name(&self) -> &str {
        "Rules"
    }

    fn preflight(&self, field: &Field, ctx: &StageContext<'_>) -> ConfigResult<()> {
        for link in field.rule_chain() {
            ctx.resolve_rule(field, link)?;
        }
        Ok(())
    }

    fn apply(&self, field: &mut Field, ctx: &StageContext<'_>) -> ConfigResult<Vec<ErrorEntry>> {
        let field = &*field;
        let mut errors = Vec::new();

        for link in field.rule_chain() {
            let rule = ctx.resolve_rule(field, link)?;
            let parameter = link.parameter();

            if rule(field.value(), parameter) {
                continue;
            }

            let template = ctx.template(&link.identifier)?;
            let message = match parameter {
                Some(param) => format_template(template, &[field.label(), param]),
                None => format_template(template, &[field.label()]),
            };
            log::debug!("Field '{}' failed rule '{}'", field.name(), link);
            errors.push(ErrorEntry::rule(
                field.name(),
                &link.identifier,
                parameter,
                message,
            ));
        }

        for (index, custom) in field.custom_rules().iter().enumerate() {
            if !custom.check(field.name(), field.value()) {
                log::debug!("Field '{}' failed custom rule #{}", field.name(), index);
                let message = format_template(custom.error_template(), &[field.label()]);
                errors.push(ErrorEntry::custom(field.name(), index, message));
            }
        }

        Ok(errors)
    }
}

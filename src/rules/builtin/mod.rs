//! Built-in rule implementations.
//!
//! This module contains the base rule library that ships with formgate. Every
//! rule here has a message template in the built-in `en` and `fr` catalogs.
//!
//! Parameterized rules fail when their parameter is missing or unusable:
//! `less_than` without a number is a configuration mistake, and passing
//! silently would hide it.

mod network;
mod numeric;
mod text;

use crate::rules::registry::RuleRegistry;

/// Register all built-in rules.
pub fn register_all(registry: &mut RuleRegistry) {
    text::register(registry);
    numeric::register(registry);
    network::register(registry);
}

// Re-export for direct access
pub use network::{valid_email, valid_emails, valid_ip, valid_url};
pub use numeric::{
    decimal, greater_than, integer, is_natural, is_natural_no_zero, less_than, numeric,
};
pub use text::{
    alpha, alpha_dash, alpha_numeric, exact_length, in_list, max_length, min_length, regex_match,
    required,
};

/// Parse a numeric rule parameter, logging when it is unusable.
fn numeric_parameter(rule: &str, parameter: Option<&str>) -> Option<f64> {
    let parsed = parameter.and_then(|p| p.trim().parse::<f64>().ok());
    if parsed.is_none() {
        log::warn!("Rule '{}' needs a numeric parameter, got {:?}", rule, parameter);
    }
    parsed
}

/// Parse a length rule parameter, logging when it is unusable.
fn length_parameter(rule: &str, parameter: Option<&str>) -> Option<usize> {
    let parsed = parameter.and_then(|p| p.trim().parse::<usize>().ok());
    if parsed.is_none() {
        log::warn!("Rule '{}' needs a length parameter, got {:?}", rule, parameter);
    }
    parsed
}

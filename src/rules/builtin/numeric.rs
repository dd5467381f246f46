//! Numeric rules.
//!
//! Strings are checked against strict patterns rather than a plain parse, so
//! `"1e5"` or `" 12"` are not numeric.

use super::numeric_parameter;
use crate::core::types::Value;
use crate::rules::registry::RuleRegistry;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"^[-+]?[0-9]*\.?[0-9]+$").expect("numeric pattern is valid");
    static ref INTEGER: Regex = Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern is valid");
    static ref DECIMAL: Regex = Regex::new(r"^[-+]?[0-9]+\.[0-9]+$").expect("decimal pattern is valid");
    static ref NATURAL: Regex = Regex::new(r"^[0-9]+$").expect("natural pattern is valid");
}

/// Register numeric rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register("numeric", "A number", numeric);
    registry.register("integer", "A whole number", integer);
    registry.register("decimal", "A number with a decimal part", decimal);
    registry.register("is_natural", "Zero or a positive whole number", is_natural);
    registry.register("is_natural_no_zero", "A positive whole number", is_natural_no_zero);
    registry.register_parameterized("greater_than", "A number greater than N", greater_than);
    registry.register_parameterized("less_than", "A number less than N", less_than);
}

/// Any number: integer, float, or a numeric string.
pub fn numeric(value: &Value, _: Option<&str>) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::String(s) => NUMERIC.is_match(s),
        _ => false,
    }
}

/// A whole number.
pub fn integer(value: &Value, _: Option<&str>) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::String(s) => INTEGER.is_match(s),
        _ => false,
    }
}

/// A number written with a decimal part.
pub fn decimal(value: &Value, _: Option<&str>) -> bool {
    match value {
        Value::Float(f) => f.is_finite(),
        Value::String(s) => DECIMAL.is_match(s),
        _ => false,
    }
}

/// Zero or a positive whole number.
pub fn is_natural(value: &Value, _: Option<&str>) -> bool {
    match value {
        Value::Integer(i) => *i >= 0,
        Value::String(s) => NATURAL.is_match(s),
        _ => false,
    }
}

/// A strictly positive whole number.
pub fn is_natural_no_zero(value: &Value, param: Option<&str>) -> bool {
    is_natural(value, param) && value.as_f64().is_some_and(|n| n != 0.0)
}

/// A number strictly greater than the parameter.
pub fn greater_than(value: &Value, bound: Option<&str>) -> bool {
    match (numeric_parameter("greater_than", bound), value.as_f64()) {
        (Some(bound), Some(n)) if numeric(value, None) => n > bound,
        _ => false,
    }
}

/// A number strictly less than the parameter.
pub fn less_than(value: &Value, bound: Option<&str>) -> bool {
    match (numeric_parameter("less_than", bound), value.as_f64()) {
        (Some(bound), Some(n)) if numeric(value, None) => n < bound,
        _ => false,
    }
}

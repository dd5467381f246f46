//! Numeric conversion filters.
//!
//! Conversions only happen when the input is numeric. Anything else passes
//! through unchanged so that a `numeric` or `integer` rule later in the
//! pipeline can still report it.

use crate::core::types::Value;
use crate::filters::registry::FilterRegistry;

/// Register numeric filters.
pub fn register(registry: &mut FilterRegistry) {
    registry.register("to_integer", "Convert numeric input to an integer", to_integer);
    registry.register("to_float", "Convert numeric input to a float", to_float);
}

/// Convert to an integer, truncating any fractional part.
pub fn to_integer(value: Value, _: Option<&str>) -> Value {
    if let Some(i) = value.as_i64() {
        return Value::Integer(i);
    }
    match value.as_f64() {
        Some(f) if f.abs() < i64::MAX as f64 => Value::Integer(f.trunc() as i64),
        _ => value,
    }
}

/// Convert to a float.
pub fn to_float(value: Value, _: Option<&str>) -> Value {
    match value.as_f64() {
        Some(f) => Value::Float(f),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(Value::from(" 42 "), None), Value::Integer(42));
        assert_eq!(to_integer(Value::from("4.9"), None), Value::Integer(4));
        assert_eq!(to_integer(Value::Float(-2.5), None), Value::Integer(-2));
        assert_eq!(to_integer(Value::from("abc"), None), Value::from("abc"));
        assert_eq!(to_integer(Value::Null, None), Value::Null);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(Value::from("2.5"), None), Value::Float(2.5));
        assert_eq!(to_float(Value::Integer(3), None), Value::Float(3.0));
        assert_eq!(to_float(Value::Bool(true), None), Value::Bool(true));
    }
}

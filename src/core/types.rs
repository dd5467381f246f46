//! Field value type.
//!
//! Form input arrives as loosely typed data (query strings, JSON bodies, TOML
//! fixtures). Rather than forcing a schema onto it, every field carries a
//! [`Value`] and rules decide for themselves how to interpret it:
//! - Text-oriented rules read the textual form via [`Value::to_text`]
//! - Numeric rules accept numbers and numeric strings via [`Value::as_f64`]
//! - Filters that only make sense on text leave other variants untouched

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value.
///
/// Deserializes untagged, so `"abc"`, `42`, `4.2`, `true`, `null` and arrays
/// map directly onto the matching variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value was supplied for the field
    #[default]
    Null,
    /// Boolean (checkboxes, JSON booleans)
    Bool(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string, the common case for raw form input
    String(String),
    /// Multi-valued input (multi-selects, repeated keys)
    List(Vec<Value>),
}

impl Value {
    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Check whether no value was supplied.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check whether the value carries no meaningful content.
    ///
    /// Null, whitespace-only strings and empty lists are blank. Numbers and
    /// booleans never are.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) => false,
        }
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Get the boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Borrow the items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Interpret the value as a number.
    ///
    /// Strings are parsed after trimming; non-finite results are rejected so
    /// that `"inf"` and `"NaN"` do not count as numeric input.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) if f.is_finite() => Some(*f),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Interpret the value as an integer.
    ///
    /// Floats only qualify when they have no fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Textual form of the value, as it would appear in a submitted form.
    ///
    /// Null renders as the empty string and lists join their items with `,`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Apply a string transform when the value is a string, otherwise return it unchanged.
    pub fn map_text<F>(self, f: F) -> Value
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Value::String(s) => Value::String(f(s)),
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings() {
        assert_eq!(Value::from(" 70 ").as_f64(), Some(70.0));
        assert_eq!(Value::from("3.5").as_f64(), Some(3.5));
        assert_eq!(Value::from("abc").as_f64(), None);
        assert_eq!(Value::from("NaN").as_f64(), None);
        assert_eq!(Value::from("12").as_i64(), Some(12));
        assert_eq!(Value::Float(4.0).as_i64(), Some(4));
        assert_eq!(Value::Float(4.5).as_i64(), None);
    }

    #[test]
    fn test_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("   ").is_blank());
        assert!(Value::List(vec![]).is_blank());
        assert!(!Value::Integer(0).is_blank());
        assert!(!Value::from("0").is_blank());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::from(vec!["a", "b"]).to_text(), "a,b");
        assert_eq!(Value::Integer(15).to_string(), "15");
    }

    #[test]
    fn test_untagged_json() {
        let v: Value = serde_json::from_str(r#"["x", 1, 2.5, true, null]"#).unwrap();
        assert_eq!(
            v,
            Value::List(vec![
                Value::from("x"),
                Value::Integer(1),
                Value::Float(2.5),
                Value::Bool(true),
                Value::Null,
            ])
        );
    }

    #[test]
    fn test_map_text_leaves_numbers() {
        assert_eq!(Value::Integer(3).map_text(|s| s + "!"), Value::Integer(3));
        assert_eq!(Value::from("a").map_text(|s| s + "!"), Value::from("a!"));
    }
}

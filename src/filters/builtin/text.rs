//! Text filters.
//!
//! All of these leave non-string values untouched, except `default` which
//! exists precisely to replace missing values.

use crate::core::types::Value;
use crate::filters::registry::FilterRegistry;

/// Register text filters.
pub fn register(registry: &mut FilterRegistry) {
    registry.register("trim", "Strip surrounding whitespace, or the given characters", trim);
    registry.register("ltrim", "Strip leading whitespace, or the given characters", ltrim);
    registry.register("rtrim", "Strip trailing whitespace, or the given characters", rtrim);
    registry.register("lowercase", "Convert to lower case", lowercase);
    registry.register("uppercase", "Convert to upper case", uppercase);
    registry.register("ucfirst", "Upper-case the first character", ucfirst);
    registry.register(
        "collapse_whitespace",
        "Collapse runs of whitespace into single spaces",
        collapse_whitespace,
    );
    registry.register("strip_slashes", "Remove backslash escapes", strip_slashes);
    registry.register("truncate", "Keep at most N characters", truncate);
    registry.register("default", "Replace a blank value with the parameter", default_value);
}

fn in_set(chars: &str) -> impl Fn(char) -> bool + '_ {
    move |c| chars.contains(c)
}

/// Strip whitespace (or the characters listed in the parameter) from both ends.
pub fn trim(value: Value, chars: Option<&str>) -> Value {
    value.map_text(|s| match chars {
        Some(set) => s.trim_matches(in_set(set)).to_string(),
        None => s.trim().to_string(),
    })
}

/// Strip whitespace (or the characters listed in the parameter) from the start.
pub fn ltrim(value: Value, chars: Option<&str>) -> Value {
    value.map_text(|s| match chars {
        Some(set) => s.trim_start_matches(in_set(set)).to_string(),
        None => s.trim_start().to_string(),
    })
}

/// Strip whitespace (or the characters listed in the parameter) from the end.
pub fn rtrim(value: Value, chars: Option<&str>) -> Value {
    value.map_text(|s| match chars {
        Some(set) => s.trim_end_matches(in_set(set)).to_string(),
        None => s.trim_end().to_string(),
    })
}

/// Lower-case the value.
pub fn lowercase(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| s.to_lowercase())
}

/// Upper-case the value.
pub fn uppercase(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| s.to_uppercase())
}

/// Upper-case the first character.
pub fn ucfirst(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

/// Replace every run of whitespace with a single space and trim the ends.
pub fn collapse_whitespace(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Remove backslash escapes: `\'` becomes `'` and `\\` becomes `\`.
pub fn strip_slashes(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else {
                out.push(c);
            }
        }
        out
    })
}

/// Keep at most N characters. Without a valid N the value is unchanged.
pub fn truncate(value: Value, max: Option<&str>) -> Value {
    let Some(max) = max.and_then(|m| m.trim().parse::<usize>().ok()) else {
        log::warn!("truncate needs a character count, got {:?}", max);
        return value;
    };
    value.map_text(|s| s.chars().take(max).collect())
}

/// Replace a blank value (null, empty string, empty list) with the parameter.
pub fn default_value(value: Value, fallback: Option<&str>) -> Value {
    match fallback {
        Some(fallback) if value.is_blank() => Value::from(fallback),
        _ => value,
    }
}

//! Presence, length and character-class rules.

use super::length_parameter;
use crate::core::types::Value;
use crate::rules::registry::RuleRegistry;
use lazy_static::lazy_static;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;

/// Number of compiled `regex_match` patterns kept around.
const PATTERN_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

lazy_static! {
    /// Compiled `regex_match` patterns, keyed by the raw parameter.
    static ref PATTERNS: Mutex<LruCache<String, Regex>> = Mutex::new(LruCache::new(PATTERN_CACHE_SIZE));
}

/// Register text rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register("required", "Value must not be blank", required);
    registry.register_parameterized("min_length", "At least N characters", min_length);
    registry.register_parameterized("max_length", "At most N characters", max_length);
    registry.register_parameterized("exact_length", "Exactly N characters", exact_length);
    registry.register("alpha", "Letters only", alpha);
    registry.register("alpha_numeric", "Letters and digits only", alpha_numeric);
    registry.register(
        "alpha_dash",
        "Letters, digits, underscores and dashes only",
        alpha_dash,
    );
    registry.register_parameterized("regex_match", "Matches the given pattern", regex_match);
    registry.register_parameterized("in_list", "One of a comma-separated list", in_list);
}

fn char_count(value: &Value) -> usize {
    value.to_text().chars().count()
}

fn all_chars(value: &Value, allowed: impl Fn(char) -> bool) -> bool {
    let text = value.to_text();
    !text.is_empty() && text.chars().all(allowed)
}

/// The value is present and not blank.
pub fn required(value: &Value, _: Option<&str>) -> bool {
    !value.is_blank()
}

/// At least N characters.
pub fn min_length(value: &Value, len: Option<&str>) -> bool {
    length_parameter("min_length", len).is_some_and(|min| char_count(value) >= min)
}

/// At most N characters.
pub fn max_length(value: &Value, len: Option<&str>) -> bool {
    length_parameter("max_length", len).is_some_and(|max| char_count(value) <= max)
}

/// Exactly N characters.
pub fn exact_length(value: &Value, len: Option<&str>) -> bool {
    length_parameter("exact_length", len).is_some_and(|n| char_count(value) == n)
}

/// Letters only. Accented letters count.
pub fn alpha(value: &Value, _: Option<&str>) -> bool {
    all_chars(value, char::is_alphabetic)
}

/// Letters and digits only.
pub fn alpha_numeric(value: &Value, _: Option<&str>) -> bool {
    all_chars(value, char::is_alphanumeric)
}

/// Letters, digits, `_` and `-` only.
pub fn alpha_dash(value: &Value, _: Option<&str>) -> bool {
    all_chars(value, |c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// The whole value matches the pattern given as parameter.
///
/// The pattern is anchored at both ends. Compiled patterns are kept in a
/// small LRU cache. An invalid pattern fails the rule.
///
/// The parameter ends at the first `]` of the chain token, so patterns
/// written in a chain cannot contain `]`: `regex_match[[0-9]+]` is a chain
/// error. Use escapes such as `\d` instead, or a custom rule.
pub fn regex_match(value: &Value, pattern: Option<&str>) -> bool {
    let Some(pattern) = pattern else {
        log::warn!("Rule 'regex_match' needs a pattern");
        return false;
    };

    let mut cache = PATTERNS.lock();
    if let Some(re) = cache.get(pattern) {
        return re.is_match(&value.to_text());
    }

    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(re) => {
            let matched = re.is_match(&value.to_text());
            cache.put(pattern.to_string(), re);
            matched
        }
        Err(e) => {
            log::warn!("Rule 'regex_match' got an invalid pattern '{}': {}", pattern, e);
            false
        }
    }
}

/// The value is one of the comma-separated entries of the parameter.
pub fn in_list(value: &Value, list: Option<&str>) -> bool {
    let text = value.to_text();
    list.is_some_and(|list| list.split(',').any(|item| item.trim() == text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::from(text)
    }

    #[test]
    fn test_required() {
        assert!(required(&s("tom"), None));
        assert!(required(&Value::Integer(0), None));
        assert!(!required(&s("   "), None));
        assert!(!required(&Value::Null, None));
        assert!(!required(&Value::List(vec![]), None));
    }

    #[test]
    fn test_lengths() {
        assert!(min_length(&s("été"), Some("3")));
        assert!(!min_length(&s("ét"), Some("3")));
        assert!(max_length(&s("abc"), Some("3")));
        assert!(!max_length(&s("abcd"), Some("3")));
        assert!(exact_length(&s("abcd"), Some("4")));
        assert!(!exact_length(&s("abcd"), Some("x")));
        assert!(!min_length(&s("abcd"), None));
    }

    #[test]
    fn test_character_classes() {
        assert!(alpha(&s("Élodie"), None));
        assert!(!alpha(&s("tom2"), None));
        assert!(!alpha(&s(""), None));
        assert!(alpha_numeric(&s("tom2"), None));
        assert!(!alpha_numeric(&s("tom-2"), None));
        assert!(alpha_dash(&s("tom-2_x"), None));
        assert!(!alpha_dash(&s("tom 2"), None));
    }

    #[test]
    fn test_regex_match() {
        assert!(regex_match(&s("AB-12"), Some("[A-Z]{2}-[0-9]+")));
        assert!(!regex_match(&s("xAB-12"), Some("[A-Z]{2}-[0-9]+")));
        assert!(!regex_match(&s("a"), Some("(")));
        assert!(!regex_match(&s("a"), None));
    }

    #[test]
    fn test_regex_match_reuses_compiled_pattern() {
        let pattern = r"cache-\d+";
        assert!(regex_match(&s("cache-1"), Some(pattern)));
        assert!(PATTERNS.lock().contains(pattern));
        assert!(regex_match(&s("cache-22"), Some(pattern)));
        assert!(!regex_match(&s("cache-x"), Some(pattern)));
    }

    #[test]
    fn test_in_list() {
        assert!(in_list(&s("fr"), Some("en, fr,de")));
        assert!(!in_list(&s("es"), Some("en,fr")));
        assert!(!in_list(&s("fr"), None));
    }
}

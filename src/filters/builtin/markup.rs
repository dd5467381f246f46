//! Markup and URL filters.

use crate::core::types::Value;
use crate::filters::registry::FilterRegistry;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("tag pattern is valid");
    static ref URL_SCHEME: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid");
}

/// Register markup filters.
pub fn register(registry: &mut FilterRegistry) {
    registry.register("strip_tags", "Remove HTML and XML tags", strip_tags);
    registry.register(
        "encode_php_tags",
        "Neutralise PHP open and close tags",
        encode_php_tags,
    );
    registry.register("html_escape", "Escape HTML special characters", html_escape);
    registry.register("prep_url", "Add http:// to URLs missing a scheme", prep_url);
}

/// Remove anything that looks like a tag.
pub fn strip_tags(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| TAG.replace_all(&s, "").into_owned())
}

/// Turn `<?` and `?>` into their entity-encoded forms.
pub fn encode_php_tags(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| s.replace("<?", "&lt;?").replace("?>", "?&gt;"))
}

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn html_escape(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                _ => out.push(c),
            }
        }
        out
    })
}

/// Prefix `http://` when the URL has no scheme. A bare `http://` becomes empty.
pub fn prep_url(value: Value, _: Option<&str>) -> Value {
    value.map_text(|s| {
        if s.is_empty() || s == "http://" {
            String::new()
        } else if URL_SCHEME.is_match(&s) {
            s
        } else {
            format!("http://{}", s)
        }
    })
}

//! Built-in filter implementations.
//!
//! This module contains the base filter library that ships with formgate.

mod markup;
mod numeric;
mod text;

use crate::filters::registry::FilterRegistry;

/// Register all built-in filters.
pub fn register_all(registry: &mut FilterRegistry) {
    text::register(registry);
    markup::register(registry);
    numeric::register(registry);
}

// Re-export for direct access
pub use markup::{encode_php_tags, html_escape, prep_url, strip_tags};
pub use numeric::{to_float, to_integer};
pub use text::{
    collapse_whitespace, default_value, lowercase, ltrim, rtrim, strip_slashes, trim, truncate,
    ucfirst, uppercase,
};

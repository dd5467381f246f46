//! Message module.
//!
//! Localized error templates for named rules.

pub mod builtin;
pub mod catalog;

pub use catalog::{format_template, CatalogSet, MessageCatalog};

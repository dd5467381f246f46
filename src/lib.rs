//! # Formgate - Declarative Form Validation
//!
//! Formgate validates named form fields against chains of rules after
//! cleaning them with chains of filters. Chains are written as compact
//! strings such as `"required|less_than[60]"`.
//!
//! ## Features
//!
//! - **Declarative Chains**: Rules and filters are configured with pipe-separated strings
//! - **Filter Before Validate**: Every field is cleaned before its rules run
//! - **Custom Logic**: Attach closures as rules or filters to any field
//! - **Localized Messages**: Error templates per locale, with `en` and `fr` built in
//! - **Pluggable Libraries**: Rules, filters and messages come from swappable providers
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate::prelude::*;
//!
//! let mut engine = ValidationEngine::with_builtins(EngineConfig::new().with_locale("en"));
//!
//! engine.set_rules("age", "Age", "numeric|less_than[60]").unwrap();
//! engine.set_filters("nom", "Name", "trim").unwrap();
//! engine.add_custom_filter("nom", "Name", |_, value| {
//!     value.map_text(|s| s.replace('o', "0"))
//! });
//!
//! engine.bind([("age", "70"), ("nom", "  tom  ")]);
//!
//! assert!(!engine.validate().unwrap());
//! assert_eq!(engine.value("nom"), Some(&Value::from("t0m")));
//! assert_eq!(
//!     engine.errors(),
//!     "<p>The Age field must contain a number less than 60.</p>\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`core`]: Values, chains, fields and error handling
//! - [`form`]: Field registry and serializable form definitions
//! - [`rules`]: Rule provider trait, registry and built-in rules
//! - [`filters`]: Filter provider trait, registry and built-in filters
//! - [`messages`]: Localized error templates
//! - [`validation`]: Per-field pipeline and error collection
//! - [`engine`]: The validation session facade
//!
//! ## Bringing Your Own Library
//!
//! Anything implementing [`RuleLibraryProvider`](rules::RuleLibraryProvider)
//! can supply rules:
//!
//! ```rust
//! use formgate::prelude::*;
//! use std::sync::Arc;
//!
//! let mut rules = RuleRegistry::with_builtins();
//! rules.register("even", "Even integers", |value, _| {
//!     value.as_i64().is_some_and(|n| n % 2 == 0)
//! });
//!
//! let mut messages = CatalogSet::with_builtins();
//! messages.insert("en", "even", "The {0} field must be even.");
//!
//! let mut engine = ValidationEngine::new(
//!     Arc::new(rules),
//!     Arc::new(FilterRegistry::with_builtins()),
//!     Arc::new(messages),
//!     EngineConfig::new().with_locale("en"),
//! );
//! engine.set_rules("n", "Number", "required|even").unwrap();
//! engine.set_value("n", 3).unwrap();
//! assert!(!engine.validate().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod engine;
pub mod filters;
pub mod form;
pub mod messages;
pub mod rules;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use formgate::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::chain::{parse_chain, Chain, ChainLink};
    pub use crate::core::field::{CustomFilter, CustomRule, Field};
    pub use crate::core::types::Value;

    // Errors
    pub use crate::core::error::{ChainError, ConfigError, FormError, FormResult};

    // Forms
    pub use crate::form::definition::{FieldDefinition, FormDefinition};
    pub use crate::form::registry::FieldRegistry;

    // Libraries
    pub use crate::filters::registry::{FilterLibraryProvider, FilterRegistry, FilterRegistryBuilder};
    pub use crate::messages::catalog::{CatalogSet, MessageCatalog};
    pub use crate::rules::registry::{RuleLibraryProvider, RuleRegistry};

    // Validation
    pub use crate::validation::collector::{Delimiters, ErrorCollector, ErrorEntry, ErrorSource};
    pub use crate::validation::pipeline::{PipelineSummary, ValidationPipeline};

    // Engine
    pub use crate::engine::config::EngineConfig;
    pub use crate::engine::session::{SessionState, ValidationEngine};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

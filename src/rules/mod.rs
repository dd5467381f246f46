//! Rule module.
//!
//! Contains the rule provider trait, the rule registry and the built-in rule
//! library.

pub mod builtin;
pub mod registry;

pub use registry::{RuleEntry, RuleFn, RuleLibraryProvider, RuleRegistry};

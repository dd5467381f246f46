//! Filter module.
//!
//! Contains the filter provider trait, the filter registry and the built-in
//! filter library.

pub mod builtin;
pub mod registry;

pub use registry::{FilterEntry, FilterFn, FilterLibraryProvider, FilterRegistry, FilterRegistryBuilder};

//! Form module.
//!
//! Holds the fields of a validation session and their serializable definitions.

pub mod definition;
pub mod registry;

pub use definition::{FieldDefinition, FormDefinition};
pub use registry::FieldRegistry;

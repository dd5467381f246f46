//! Core types for formgate.
//!
//! This module contains the building blocks everything else is made of:
//! - Field values
//! - Chain parsing
//! - The field entity with its custom rules and filters
//! - Error types

pub mod chain;
pub mod error;
pub mod field;
pub mod types;

// Re-export commonly used types
pub use chain::{parse_chain, Chain, ChainLink};
pub use error::{ChainError, ConfigError, FormError, FormResult};
pub use field::{CustomFilter, CustomRule, Field};
pub use types::Value;

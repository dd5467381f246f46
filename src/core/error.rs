//! Error types for formgate.
//!
//! Two very different things can go wrong while validating a form:
//! - The configuration is broken (a chain names a rule nobody registered, a
//!   chain string is malformed). These are programming mistakes and surface
//!   as `Err` values that abort the call.
//! - The submitted data is invalid. That is the expected outcome of
//!   validation and is reported through the error collector, never as an
//!   `Err`.

use thiserror::Error;

/// Top-level error type for formgate.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid chain: {0}")]
    Chain(#[from] ChainError),

    #[error("Field '{0}' is not registered")]
    UnknownField(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration mistakes detected while resolving chains.
///
/// Any of these aborts a validation run: silently skipping an unknown rule
/// would let invalid data through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Rule '{rule}' used by field '{field}' is not registered")]
    UnresolvedRule { field: String, rule: String },

    #[error("Filter '{filter}' used by field '{field}' is not registered")]
    UnresolvedFilter { field: String, filter: String },

    #[error("No '{locale}' message for rule '{rule}'")]
    MissingMessage { rule: String, locale: String },
}

/// Errors raised while parsing a chain string such as `required|less_than[60]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("empty entry at index {index} in '{chain}'")]
    EmptyToken { chain: String, index: usize },

    #[error("missing identifier before '[' in '{token}'")]
    MissingIdentifier { token: String },

    #[error("unclosed parameter in '{token}'")]
    UnclosedParameter { token: String },

    #[error("unexpected text after ']' in '{token}'")]
    TrailingCharacters { token: String },

    #[error("invalid identifier '{token}'")]
    InvalidIdentifier { token: String },
}

impl ConfigError {
    /// Field the error was raised for, if it is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::UnresolvedRule { field, .. }
            | ConfigError::UnresolvedFilter { field, .. } => Some(field),
            ConfigError::MissingMessage { .. } => None,
        }
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> String {
        match self {
            ConfigError::UnresolvedRule { rule, .. } => format!(
                "Register a rule named '{}' in the rule library or remove it from the chain",
                rule
            ),
            ConfigError::UnresolvedFilter { filter, .. } => format!(
                "Register a filter named '{}' in the filter library or remove it from the chain",
                filter
            ),
            ConfigError::MissingMessage { rule, locale } => format!(
                "Add a '{}' template to the '{}' message catalog",
                rule, locale
            ),
        }
    }
}

impl FormError {
    /// Check whether this error comes from the form configuration rather than I/O or parsing of input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FormError::Config(_) | FormError::Chain(_) | FormError::UnknownField(_)
        )
    }
}

/// Result type alias for formgate operations.
pub type FormResult<T> = Result<T, FormError>;

/// Result type alias for chain parsing.
pub type ChainResult<T> = Result<T, ChainError>;

/// Result type alias for chain resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;

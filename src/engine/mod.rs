//! Engine module.
//!
//! The validation session facade and its configuration.

pub mod config;
pub mod session;

pub use config::{EngineConfig, DEFAULT_LOCALE};
pub use session::{SessionState, ValidationEngine};

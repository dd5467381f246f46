//! Validation module.
//!
//! The per-field pipeline: filters first, then rules, with failures gathered
//! in an error collector.

pub mod collector;
pub mod pipeline;
pub mod stages;

pub use collector::{Delimiters, ErrorCollector, ErrorEntry, ErrorSource};
pub use pipeline::{PipelineSummary, ValidationPipeline};
pub use stages::{FieldStage, FilterStage, RuleStage, StageContext};

//! Validation pipeline implementation.

use crate::core::error::ConfigResult;
use crate::core::field::Field;
use crate::form::registry::FieldRegistry;
use crate::validation::collector::{ErrorCollector, ErrorEntry};
use crate::validation::stages::{FieldStage, FilterStage, RuleStage, StageContext};
use std::time::Instant;

/// Outcome of one pass over all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Whether no field produced an error.
    pub valid: bool,
    /// Number of fields processed.
    pub fields: usize,
    /// Number of errors collected.
    pub errors: usize,
    /// Time taken in microseconds.
    pub duration_us: u64,
}

/// Two-stage per-field pipeline.
///
/// Every field is filtered before any of its rules run. The stage order is
/// fixed; there is no way to insert a stage between filtering and rules.
pub struct ValidationPipeline {
    filters: FilterStage,
    rules: RuleStage,
}

impl ValidationPipeline {
    /// Create the pipeline.
    pub fn new() -> Self {
        Self {
            filters: FilterStage,
            rules: RuleStage,
        }
    }

    /// Stages in execution order.
    pub fn stages(&self) -> [&dyn FieldStage; 2] {
        [&self.filters, &self.rules]
    }

    /// Run both stages on one field.
    pub fn run_field(&self, field: &mut Field, ctx: &StageContext<'_>) -> ConfigResult<Vec<ErrorEntry>> {
        self.filters.apply(field, ctx)?;

        if field.has_rules() {
            self.rules.apply(field, ctx)
        } else {
            Ok(Vec::new())
        }
    }

    /// Run every field in registry order, collecting failures.
    ///
    /// All fields are processed even after a failure. A configuration error
    /// stops the run immediately.
    pub fn run(
        &self,
        registry: &mut FieldRegistry,
        ctx: &StageContext<'_>,
        collector: &mut ErrorCollector,
    ) -> ConfigResult<PipelineSummary> {
        let start = Instant::now();
        let before = collector.len();
        let mut fields = 0;

        for field in registry.iter_mut() {
            let errors = self.run_field(field, ctx)?;
            collector.extend(errors);
            fields += 1;
        }

        let errors = collector.len() - before;
        Ok(PipelineSummary {
            valid: errors == 0,
            fields,
            errors,
            duration_us: start.elapsed().as_micros() as u64,
        })
    }

    /// Check that every chain of every field resolves, without touching values.
    pub fn preflight(&self, registry: &FieldRegistry, ctx: &StageContext<'_>) -> ConfigResult<()> {
        for field in registry.iter() {
            for stage in self.stages() {
                stage.preflight(field, ctx)?;
            }
        }
        Ok(())
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

//! Rule Evaluator: the business rule over a processing model
//!
//! Computes the derived result, its delta, and the report description.

use crate::error::RuleError;
use crate::model::{ProcessingModel, ReportModel};

/// Report label attached to every evaluation
pub const DESCRIPTION: &str = "Some description";

/// The business rule evaluator
///
/// Stateless; one instance can serve any number of callers concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusinessRule;

impl BusinessRule {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the rule against a model
    ///
    /// `result` is `input_a + input_b * factor`, with multiplication
    /// binding tighter than addition. `delta` is the literal
    /// `|result - input_a|` difference, not the algebraic shortcut
    /// `|input_b * factor|`, so rounding follows the result term.
    pub fn calculate(&self, model: &ProcessingModel) -> Result<ReportModel, RuleError> {
        model.validate()?;

        let result = model.input_a + model.input_b * model.factor;
        let delta = (result - model.input_a).abs();

        tracing::debug!(result, delta, "rule evaluated");

        Ok(ReportModel {
            result,
            delta,
            description: DESCRIPTION.to_string(),
        })
    }
}

/// Evaluate the rule against a model with a default evaluator
pub fn evaluate(model: &ProcessingModel) -> Result<ReportModel, RuleError> {
    BusinessRule::new().calculate(model)
}

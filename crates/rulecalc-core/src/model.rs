//! Data Model: ProcessingModel and ReportModel
//!
//! Plain value records exchanged with the rule evaluator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::RuleError;

/// Input record for a rule evaluation
///
/// Wire names are PascalCase (`InputA`, `InputB`, `Factor`) to match the
/// host object model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessingModel {
    /// Base term
    pub input_a: f64,

    /// Scaled term
    pub input_b: f64,

    /// Multiplier applied to `input_b`
    pub factor: f64,
}

impl ProcessingModel {
    /// Create a new model
    pub fn new(input_a: f64, input_b: f64, factor: f64) -> Self {
        Self {
            input_a,
            input_b,
            factor,
        }
    }

    /// Check that every field is a real number
    ///
    /// NaN and infinities are rejected before evaluation.
    pub fn validate(&self) -> Result<(), RuleError> {
        for (name, value) in [
            ("InputA", self.input_a),
            ("InputB", self.input_b),
            ("Factor", self.factor),
        ] {
            if !value.is_finite() {
                return Err(RuleError::InvalidInput(format!(
                    "{} is not a finite number: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Build a model from untyped host data
    ///
    /// A missing or non-numeric field surfaces as `InvalidInput`.
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::InvalidInput(e.to_string()))
    }
}

/// Output record produced by a rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportModel {
    /// Sum term: `InputA + InputB * Factor`
    pub result: f64,

    /// Absolute distance between `Result` and `InputA`
    pub delta: f64,

    /// Report label
    pub description: String,
}

impl ReportModel {
    /// Convert the report to untyped host data
    pub fn to_value(&self) -> Result<Value, RuleError> {
        serde_json::to_value(self).map_err(|e| RuleError::SerializeError(e.to_string()))
    }
}

impl fmt::Display for ReportModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: result={} delta={}",
            self.description, self.result, self.delta
        )
    }
}

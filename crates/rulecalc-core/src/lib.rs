//! Rulecalc Core: Business Rule Evaluation
//!
//! Evaluates a fixed business rule over a processing model and returns a
//! report model carrying the derived figures.
//!
//! # Architecture
//!
//! ```text
//! ProcessingModel → validate → evaluate → ReportModel
//!  {InputA,            ↓           ↓        {Result,
//!   InputB,       InvalidInput   result      Delta,
//!   Factor}                      delta       Description}
//! ```
//!
//! # Example
//!
//! ```
//! use rulecalc_core::{evaluate, ProcessingModel};
//!
//! let model = ProcessingModel::new(10.0, 5.0, 2.0);
//! let report = evaluate(&model).unwrap();
//!
//! assert_eq!(report.result, 20.0);
//! assert_eq!(report.delta, 10.0);
//! assert_eq!(report.description, "Some description");
//! ```
//!
//! # Host boundary
//!
//! Hosts that hold records as untyped JSON can cross the boundary with
//! [`ProcessingModel::from_value`] and [`ReportModel::to_value`]:
//!
//! ```
//! use rulecalc_core::{evaluate, ProcessingModel};
//! use serde_json::json;
//!
//! let model = ProcessingModel::from_value(json!({
//!     "InputA": -3.0,
//!     "InputB": 4.0,
//!     "Factor": -1.0,
//! })).unwrap();
//!
//! let value = evaluate(&model).unwrap().to_value().unwrap();
//! assert_eq!(value["Result"], json!(-7.0));
//! ```

pub mod error;
pub mod model;
pub mod rule;

pub use error::RuleError;
pub use model::{ProcessingModel, ReportModel};
pub use rule::{evaluate, BusinessRule, DESCRIPTION};

/// Crate version
pub const RULECALC_VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_workflow() {
        let input = json!({
            "InputA": 10.0,
            "InputB": 5.0,
            "Factor": 2.0,
        });

        let model = ProcessingModel::from_value(input).unwrap();
        let report = BusinessRule::new().calculate(&model).unwrap();
        let value = report.to_value().unwrap();

        assert_eq!(value["Result"], json!(20.0));
        assert_eq!(value["Delta"], json!(10.0));
        assert_eq!(value["Description"], json!("Some description"));
    }

    #[test]
    fn test_invalid_host_input() {
        let err = ProcessingModel::from_value(json!({ "InputA": 10.0 })).unwrap_err();
        assert!(err.to_string().starts_with("INPUT/"));
    }

    #[test]
    fn test_description_constant() {
        assert_eq!(DESCRIPTION, "Some description");
    }
}

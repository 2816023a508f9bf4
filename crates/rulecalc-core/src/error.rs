//! Error Model for rule evaluation
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("INPUT/{0}")]
    InvalidInput(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}

//! Error types surfaced by flag parsing

use thiserror::Error;

/// Failure to parse a single `--filter` expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Missing value for filtering")]
    MissingValue,

    #[error("Missing property for filtering")]
    MissingProperty,

    #[error("Missing operator for filtering")]
    MissingOperator,

    #[error("Invalid filtering operator [{0}]")]
    UnknownOperator(String),
}

/// A flag occurrence whose value could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value [{value}] for flag [{flag}]: {source}")]
pub struct InvalidFlagValue {
    pub flag: String,
    pub value: String,
    #[source]
    pub source: FilterError,
}

impl InvalidFlagValue {
    pub fn new(flag: impl Into<String>, value: impl Into<String>, source: FilterError) -> Self {
        Self {
            flag: flag.into(),
            value: value.into(),
            source,
        }
    }
}

//! Errors
//!
//! Custom error types used throughout the `minitree` crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use crate::sample::Value;

/// Errors that can occur while building or querying a decision tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A tree was requested from zero training examples.
    #[error("Cannot build a tree from an empty set of examples.")]
    EmptyInput,
    /// Split search was invoked with every attribute disabled.
    #[error("No attribute is enabled for splitting.")]
    NoUsableAttribute,
    /// A discrete value reached a node that never saw it during training.
    #[error("Feature number {feature} has value {value}, which was never observed at this node.")]
    UnseenCategory {
        /// Index of the tested feature.
        feature: usize,
        /// The offending value.
        value: Value,
    },
    /// A record is shorter than the index a node tests.
    #[error("Feature number {0} does not exist in a record of length {1}.")]
    FeatureOutOfRange(usize, usize),
    /// A numeric feature holds a non-numeric value.
    #[error("Feature number {0} is numeric, but the value {1} is not a number.")]
    NotNumeric(usize, Value),
    /// A record does not match the number of attributes.
    #[error("Expected {0} condition values, but the record has {1}.")]
    ArityMismatch(usize, usize),
    /// A discrete feature holds a value outside of its domain.
    #[error("The value {1} is not in the domain of feature number {0}.")]
    OutOfDomain(usize, Value),
    /// A record has an empty decision vector.
    #[error("A record must have at least one decision value.")]
    MissingDecision,
    /// A null cell was found in the input table.
    #[error("Column {0} has a missing value at row {1}.")]
    MissingValue(String, usize),
    /// The requested column does not exist.
    #[error("The feature named `{0}` does not exist.")]
    UnknownFeature(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read the input file.
    #[error("Unable to read the input: {0}")]
    Io(#[from] std::io::Error),
    /// Error raised by `polars`.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    /// Error raised while (de)serializing a configuration.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

//! Error types for record loading and selection lookup.

use thiserror::Error;

/// Errors raised while building a [`RecordStore`](crate::RecordStore).
///
/// Every variant is fatal to startup: a store that cannot guarantee its
/// invariants is never constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The dataset has no data rows.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A mandatory column is absent from the dataset schema.
    #[error("mandatory column '{column}' is missing")]
    MissingColumn { column: String },

    /// A mandatory cell is null. `row` is 1-based over data rows.
    #[error("row {row}: mandatory value '{column}' is missing")]
    MissingValue { row: usize, column: String },

    /// A cell holds a value of the wrong kind.
    #[error("row {row}: value in '{column}' is not a valid {expected}")]
    InvalidValue {
        row: usize,
        column: String,
        expected: &'static str,
    },

    /// Two rows share the same country name.
    #[error("duplicate country '{country}'")]
    DuplicateCountry { country: String },
}

/// The requested country has no matching record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection: no record for country '{country}'")]
pub struct NotFoundError {
    pub country: String,
}

impl NotFoundError {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

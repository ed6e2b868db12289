//! Dataset validation errors

use thiserror::Error;

/// Reasons a fetched document cannot be charted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("dataset contains no entries")]
    Empty,

    #[error("invalid date in `{field}`: {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("entry {index} has unusable GDP value {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("date range is inverted: {from} is after {to}")]
    InvertedRange { from: String, to: String },
}

pub type DataResult<T> = Result<T, DataError>;

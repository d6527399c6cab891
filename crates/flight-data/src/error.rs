//! Data Error Types

use thiserror::Error;

/// Errors raised while reading or validating flight records
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Timestamp does not match the `YYYY-MM-DD HH:MM:SS` format
    #[error("Invalid timestamp in {field}: {value:?}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
    },

    /// Airline not in the known operator list
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Month outside the calendar range
    #[error("Month {value} is out of range [{min}, {max}]")]
    MonthOutOfRange { value: u32, min: u32, max: u32 },
}

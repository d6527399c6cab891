//! Flight Data Model and Validation
//!
//! Provides the raw flight record type, timestamp parsing, and inbound
//! request validation for the delay prediction pipeline.

mod error;
mod record;
mod validator;

pub use error::DataError;
pub use record::{parse_datetime, FlightRecord, FlightType, DATETIME_FORMAT};
pub use validator::{FlightValidator, ValidationConfig, ValidationResult};

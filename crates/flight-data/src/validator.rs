//! Inbound Flight Validation

use crate::error::DataError;
use crate::record::FlightRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Operators known to the model's training data
const KNOWN_OPERATORS: [&str; 22] = [
    "Aerolineas Argentinas",
    "Aeromexico",
    "Air Canada",
    "Air France",
    "Alitalia",
    "American Airlines",
    "Austral",
    "Avianca",
    "British Airways",
    "Copa Air",
    "Delta Air",
    "Gol Trans",
    "Grupo LATAM",
    "Iberia",
    "JetSmart SPA",
    "K.L.M.",
    "Lacsa",
    "Latin American Wings",
    "Oceanair Linhas Aereas",
    "Qantas Airways",
    "Sky Airline",
    "United Airlines",
];

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Accepted operator names
    pub operators: Vec<String>,
    /// Valid month range (inclusive)
    pub month_range: (u32, u32),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            operators: KNOWN_OPERATORS.iter().map(|s| s.to_string()).collect(),
            month_range: (1, 12),
        }
    }
}

/// Result of validating a batch of records
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether every record passed
    pub valid: bool,
    /// Errors collected across the batch
    pub errors: Vec<DataError>,
    /// Number of records checked
    pub records_checked: usize,
}

/// Validator for inbound flight records
///
/// The flight type needs no check here: [`FlightType`](crate::FlightType)
/// only admits the two valid codes.
pub struct FlightValidator {
    config: ValidationConfig,
}

impl FlightValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate the operating airline against the known operator list
    pub fn validate_operator(&self, airline: &str) -> Result<(), DataError> {
        if self.config.operators.iter().any(|op| op == airline) {
            Ok(())
        } else {
            Err(DataError::UnknownOperator(airline.to_string()))
        }
    }

    /// Validate the month of operation
    pub fn validate_month(&self, month: u32) -> Result<(), DataError> {
        let (min, max) = self.config.month_range;
        if month < min || month > max {
            Err(DataError::MonthOutOfRange {
                value: month,
                min,
                max,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a single record
    pub fn validate(&self, record: &FlightRecord) -> Result<(), DataError> {
        self.validate_operator(&record.airline)?;
        self.validate_month(record.month)
    }

    /// Validate a batch, collecting every error
    pub fn validate_all(&self, records: &[FlightRecord]) -> ValidationResult {
        let mut errors = Vec::new();
        for record in records {
            if let Err(e) = self.validate(record) {
                errors.push(e);
            }
        }
        debug!(
            "Validated {} records, {} errors",
            records.len(),
            errors.len()
        );
        ValidationResult {
            valid: errors.is_empty(),
            errors,
            records_checked: records.len(),
        }
    }
}

impl Default for FlightValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

//! Raw Flight Record

use crate::error::DataError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by both the scheduled and actual fields
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// International or national flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightType {
    /// International
    #[serde(rename = "I")]
    International,
    /// National (domestic)
    #[serde(rename = "N")]
    National,
}

impl FlightType {
    /// Single-letter code as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightType::International => "I",
            FlightType::National => "N",
        }
    }
}

/// A raw flight record as received from the caller
///
/// Field names follow the upstream dataset: `Fecha-I` is the scheduled
/// timestamp, `Fecha-O` the actual one, `OPERA` the operating airline,
/// `TIPOVUELO` the flight type and `MES` the month. The airline, flight
/// type and month are always present by construction; the timestamps are
/// optional here and checked by the feature extractor, which reports a
/// missing one as a [`DataError::MissingField`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Scheduled departure timestamp (`YYYY-MM-DD HH:MM:SS`)
    #[serde(rename = "Fecha-I", default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    /// Actual departure timestamp, present in training data only
    #[serde(rename = "Fecha-O", default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Operating airline
    #[serde(rename = "OPERA")]
    pub airline: String,
    /// International or national
    #[serde(rename = "TIPOVUELO")]
    pub flight_type: FlightType,
    /// Month of operation (1-12)
    #[serde(rename = "MES")]
    pub month: u32,
    /// Precomputed delay label, if the dataset already carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u8>,
}

impl FlightRecord {
    /// Parse the scheduled timestamp, failing if absent or malformed
    pub fn scheduled_datetime(&self) -> Result<NaiveDateTime, DataError> {
        let raw = self
            .scheduled
            .as_deref()
            .ok_or(DataError::MissingField("Fecha-I"))?;
        parse_datetime("Fecha-I", raw)
    }

    /// Parse the actual timestamp, failing if absent or malformed
    pub fn actual_datetime(&self) -> Result<NaiveDateTime, DataError> {
        let raw = self
            .actual
            .as_deref()
            .ok_or(DataError::MissingField("Fecha-O"))?;
        parse_datetime("Fecha-O", raw)
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime, DataError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| {
        DataError::InvalidTimestamp {
            field,
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn record() -> FlightRecord {
        FlightRecord {
            scheduled: Some("2023-01-01 12:00:00".to_string()),
            actual: Some("2023-01-01 12:20:00".to_string()),
            airline: "Grupo LATAM".to_string(),
            flight_type: FlightType::National,
            month: 1,
            delay: None,
        }
    }

    #[test]
    fn test_parse_scheduled() {
        let dt = record().scheduled_datetime().unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_missing_scheduled() {
        let mut rec = record();
        rec.scheduled = None;
        assert!(matches!(
            rec.scheduled_datetime(),
            Err(DataError::MissingField("Fecha-I"))
        ));
    }

    #[test]
    fn test_malformed_timestamp() {
        let mut rec = record();
        rec.actual = Some("01/01/2023 12:20".to_string());
        assert!(matches!(
            rec.actual_datetime(),
            Err(DataError::InvalidTimestamp { field: "Fecha-O", .. })
        ));
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "OPERA": "Sky Airline",
            "TIPOVUELO": "I",
            "MES": 7
        }"#;
        let rec: FlightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.airline, "Sky Airline");
        assert_eq!(rec.flight_type, FlightType::International);
        assert_eq!(rec.month, 7);
        assert!(rec.scheduled.is_none());
        assert!(rec.delay.is_none());
    }
}

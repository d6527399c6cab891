//! Feature Extraction

use crate::encoding::encode_observed;
use crate::frame::FeatureFrame;
use crate::time::minutes_diff;
use crate::vocabulary::{DELAY_THRESHOLD_MINUTES, FEATURE_COLUMNS, TARGET_COLUMN};
use flight_data::{DataError, FlightRecord};
use tracing::debug;

/// Stateless extractor from raw records to the fixed feature table
///
/// Extraction is deterministic and reentrant; the extractor holds no
/// state and may be shared freely across threads.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract features for inference (no label)
    ///
    /// Requires the scheduled timestamp on every record. The output always
    /// has exactly the 10 vocabulary columns in model order; a record whose
    /// categories all fall outside the vocabulary yields an all-zero row.
    pub fn extract_for_inference(
        &self,
        records: &[FlightRecord],
    ) -> Result<FeatureFrame, DataError> {
        self.require_scheduled(records)?;
        Ok(self.encode_and_project(records))
    }

    /// Extract features and the delay label for training
    ///
    /// A record carrying a precomputed `delay` keeps it; otherwise the
    /// label is derived from the actual and scheduled timestamps, so both
    /// must be present and well-formed.
    pub fn extract_for_training(
        &self,
        records: &[FlightRecord],
    ) -> Result<(FeatureFrame, FeatureFrame), DataError> {
        self.require_scheduled(records)?;

        let mut labels = Vec::with_capacity(records.len());
        for record in records {
            let label = match record.delay {
                Some(delay) => f64::from(delay),
                None => {
                    let diff =
                        minutes_diff(record.actual_datetime()?, record.scheduled_datetime()?);
                    if diff > DELAY_THRESHOLD_MINUTES {
                        1.0
                    } else {
                        0.0
                    }
                }
            };
            labels.push(label);
        }

        let features = self.encode_and_project(records);
        let positives = labels.iter().filter(|&&l| l == 1.0).count();
        debug!(
            "Extracted {} training rows, {} delayed",
            records.len(),
            positives
        );

        Ok((features, FeatureFrame::single_column(TARGET_COLUMN, labels)))
    }

    fn require_scheduled(&self, records: &[FlightRecord]) -> Result<(), DataError> {
        for record in records {
            if record.scheduled.is_none() {
                return Err(DataError::MissingField("Fecha-I"));
            }
        }
        Ok(())
    }

    fn encode_and_project(&self, records: &[FlightRecord]) -> FeatureFrame {
        let observed = encode_observed(records);
        debug!(
            "Encoded {} observed categories for {} records",
            observed.ncols(),
            records.len()
        );
        observed.select(&FEATURE_COLUMNS)
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_data::FlightType;

    fn record(airline: &str, flight_type: FlightType, month: u32) -> FlightRecord {
        FlightRecord {
            scheduled: Some("2023-01-01 12:00:00".to_string()),
            actual: None,
            airline: airline.to_string(),
            flight_type,
            month,
            delay: None,
        }
    }

    fn training_record(scheduled: &str, actual: &str) -> FlightRecord {
        FlightRecord {
            scheduled: Some(scheduled.to_string()),
            actual: Some(actual.to_string()),
            airline: "Grupo LATAM".to_string(),
            flight_type: FlightType::National,
            month: 1,
            delay: None,
        }
    }

    #[test]
    fn test_fixed_column_order() {
        let extractor = FeatureExtractor::new();
        let records = vec![record("Copa Air", FlightType::International, 4)];
        let features = extractor.extract_for_inference(&records).unwrap();
        assert_eq!(features.columns(), &FEATURE_COLUMNS);
    }

    #[test]
    fn test_indicators_match_record() {
        let extractor = FeatureExtractor::new();
        let records = vec![record("Grupo LATAM", FlightType::International, 7)];
        let features = extractor.extract_for_inference(&records).unwrap();
        let row = features.data().row(0).to_vec();
        // OPERA_Grupo LATAM, MES_7 and TIPOVUELO_I set, everything else 0
        assert_eq!(row, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unknown_categories_give_all_zero_row() {
        let extractor = FeatureExtractor::new();
        let records = vec![record("Unknown Airline", FlightType::National, 6)];
        let features = extractor.extract_for_inference(&records).unwrap();
        assert_eq!(features.data().row(0).sum(), 0.0);
        assert_eq!(features.columns(), &FEATURE_COLUMNS);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = FeatureExtractor::new();
        let records = vec![
            record("Sky Airline", FlightType::National, 12),
            record("Grupo LATAM", FlightType::International, 7),
        ];
        let first = extractor.extract_for_inference(&records).unwrap();
        let second = extractor.extract_for_inference(&records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_scheduled_is_schema_error() {
        let extractor = FeatureExtractor::new();
        let mut rec = record("Grupo LATAM", FlightType::National, 1);
        rec.scheduled = None;
        assert!(matches!(
            extractor.extract_for_inference(&[rec]),
            Err(DataError::MissingField("Fecha-I"))
        ));
    }

    #[test]
    fn test_label_derived_above_threshold() {
        let extractor = FeatureExtractor::new();
        let records = vec![training_record("2023-01-01 12:00:00", "2023-01-01 12:20:00")];
        let (_, target) = extractor.extract_for_training(&records).unwrap();
        assert_eq!(target.column(TARGET_COLUMN).unwrap().to_vec(), vec![1.0]);
    }

    #[test]
    fn test_label_derived_below_threshold() {
        let extractor = FeatureExtractor::new();
        let records = vec![training_record("2023-01-01 12:00:00", "2023-01-01 12:10:00")];
        let (_, target) = extractor.extract_for_training(&records).unwrap();
        assert_eq!(target.column(TARGET_COLUMN).unwrap().to_vec(), vec![0.0]);
    }

    #[test]
    fn test_precomputed_label_wins() {
        let extractor = FeatureExtractor::new();
        let mut rec = record("Grupo LATAM", FlightType::National, 1);
        rec.delay = Some(1);
        // No actual timestamp needed when the label is already there.
        let (features, target) = extractor.extract_for_training(&[rec]).unwrap();
        assert_eq!(features.nrows(), 1);
        assert_eq!(target.column(TARGET_COLUMN).unwrap().to_vec(), vec![1.0]);
    }

    #[test]
    fn test_training_without_actual_fails() {
        let extractor = FeatureExtractor::new();
        let rec = record("Grupo LATAM", FlightType::National, 1);
        assert!(matches!(
            extractor.extract_for_training(&[rec]),
            Err(DataError::MissingField("Fecha-O"))
        ));
    }

    #[test]
    fn test_row_order_matches_labels() {
        let extractor = FeatureExtractor::new();
        let records = vec![
            training_record("2023-01-01 12:00:00", "2023-01-01 12:20:00"),
            training_record("2023-01-01 12:00:00", "2023-01-01 12:05:00"),
            training_record("2023-01-01 12:00:00", "2023-01-01 13:00:00"),
        ];
        let (features, target) = extractor.extract_for_training(&records).unwrap();
        assert_eq!(features.nrows(), 3);
        assert_eq!(
            target.column(TARGET_COLUMN).unwrap().to_vec(),
            vec![1.0, 0.0, 1.0]
        );
    }
}

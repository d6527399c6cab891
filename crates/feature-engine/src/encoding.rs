//! One-Hot Encoding Over Observed Categories

use crate::frame::FeatureFrame;
use flight_data::FlightRecord;
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// One-hot encode airline, flight type and month over the categories
/// observed in `records`
///
/// Every observed category becomes a column (`OPERA_*`, `TIPOVUELO_*`,
/// `MES_*`); each row carries a 1 in exactly the columns matching its
/// record. The fixed vocabulary projection happens afterwards, in the
/// extractor, so unknown categories are simply dropped there.
pub(crate) fn encode_observed(records: &[FlightRecord]) -> FeatureFrame {
    let airlines: BTreeSet<&str> = records.iter().map(|r| r.airline.as_str()).collect();
    let flight_types: BTreeSet<&str> = records.iter().map(|r| r.flight_type.as_str()).collect();
    let months: BTreeSet<u32> = records.iter().map(|r| r.month).collect();

    let mut columns: Vec<String> = Vec::new();
    columns.extend(airlines.iter().map(|a| format!("OPERA_{a}")));
    columns.extend(flight_types.iter().map(|t| format!("TIPOVUELO_{t}")));
    columns.extend(months.iter().map(|m| format!("MES_{m}")));

    let index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let mut data = Array2::zeros((records.len(), columns.len()));
    for (row, record) in records.iter().enumerate() {
        let hits = [
            format!("OPERA_{}", record.airline),
            format!("TIPOVUELO_{}", record.flight_type.as_str()),
            format!("MES_{}", record.month),
        ];
        for name in &hits {
            if let Some(&col) = index.get(name.as_str()) {
                data[[row, col]] = 1.0;
            }
        }
    }

    FeatureFrame::new(columns, data).unwrap_or_else(|_| {
        // Unreachable: columns and data width are built together.
        FeatureFrame::single_column("", Vec::new())
    })
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

    #[test]
    fn test_observed_categories_become_columns() {
        let records = vec![
            record("Grupo LATAM", FlightType::International, 7),
            record("Sky Airline", FlightType::National, 12),
        ];
        let frame = encode_observed(&records);

        assert_eq!(frame.nrows(), 2);
        // 2 airlines + 2 flight types + 2 months
        assert_eq!(frame.ncols(), 6);
        assert_eq!(frame.column("OPERA_Grupo LATAM").unwrap().to_vec(), vec![1.0, 0.0]);
        assert_eq!(frame.column("TIPOVUELO_N").unwrap().to_vec(), vec![0.0, 1.0]);
        assert_eq!(frame.column("MES_7").unwrap().to_vec(), vec![1.0, 0.0]);
        assert_eq!(frame.column("MES_12").unwrap().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_each_row_has_one_hit_per_group() {
        let records = vec![
            record("Copa Air", FlightType::International, 4),
            record("Avianca", FlightType::International, 4),
            record("Copa Air", FlightType::National, 11),
        ];
        let frame = encode_observed(&records);
        for row in frame.data().rows() {
            // one airline + one flight type + one month
            assert_eq!(row.sum(), 3.0);
        }
    }
}

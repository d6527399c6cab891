//! Fixed Feature Vocabulary
//!
//! The classifier was selected on these 10 indicator columns. The list is
//! a constant of the system, never rediscovered from data, so that the
//! training and inference feature tables always line up column for column.

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 10;

/// The 10 indicator columns, in model order
pub const FEATURE_COLUMNS: [&str; FEATURE_DIMENSION] = [
    "OPERA_Latin American Wings",
    "MES_7",
    "MES_10",
    "OPERA_Grupo LATAM",
    "MES_12",
    "TIPOVUELO_I",
    "MES_4",
    "MES_11",
    "OPERA_Sky Airline",
    "OPERA_Copa Air",
];

/// Name of the derived label column
pub const TARGET_COLUMN: &str = "delay";

/// A flight counts as delayed past this many minutes
pub const DELAY_THRESHOLD_MINUTES: f64 = 15.0;

//! Feature Engineering Engine
//!
//! Transforms raw flight records into the fixed 10-column indicator table
//! the delay classifier is trained on, and derives the binary delay label
//! for training data.

mod encoding;
mod extractor;
mod frame;
mod time;
mod vocabulary;

pub use extractor::FeatureExtractor;
pub use frame::{FeatureFrame, FrameError};
pub use time::{is_high_season, minutes_diff, period_of_day, PeriodOfDay};
pub use vocabulary::{
    DELAY_THRESHOLD_MINUTES, FEATURE_COLUMNS, FEATURE_DIMENSION, TARGET_COLUMN,
};

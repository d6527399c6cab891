//! Delay Classifier
//!
//! Binary logistic regression over the fixed 10-column feature table,
//! with class-balanced weighting against the label imbalance typical of
//! delay data.

mod classifier;

pub use classifier::{ClassWeights, DelayClassifier, MAX_ITERATIONS};

use thiserror::Error;

/// Errors during model fitting
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Feature and target row counts disagree
    #[error("Features have {features} rows but target has {target}")]
    DimensionMismatch { features: usize, target: usize },
    /// Target is not a single column
    #[error("Target must be a single column, got {columns}")]
    TargetSchema { columns: usize },
    /// Target contains no positive examples
    #[error("Training target has no positive examples")]
    DegenerateTrainingSet,
}

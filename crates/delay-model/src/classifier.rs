//! Class-Weighted Logistic Regression

use crate::ModelError;
use feature_engine::FeatureFrame;
use ndarray::Array1;
use tracing::{debug, info, warn};

/// Fixed iteration cap for a reproducible fit
pub const MAX_ITERATIONS: usize = 1000;

/// Gradient step size
const LEARNING_RATE: f64 = 0.1;

/// Per-class loss weights, inversely proportional to class frequency mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassWeights {
    /// Weight applied to on-time (0) examples
    pub negative: f64,
    /// Weight applied to delayed (1) examples
    pub positive: f64,
}

impl ClassWeights {
    /// Compute balanced weights from class counts
    ///
    /// With `n0` negatives and `n1` positives out of `n` rows, the
    /// positive class weighs `n0/n` and the negative class `n1/n`, so
    /// the rarer class carries the larger weight.
    fn balanced(n0: usize, n1: usize) -> Self {
        let n = (n0 + n1) as f64;
        Self {
            negative: n1 as f64 / n,
            positive: n0 as f64 / n,
        }
    }
}

/// Parameters learned by a fit
#[derive(Debug, Clone)]
struct FittedParams {
    weights: Array1<f64>,
    intercept: f64,
    class_weights: ClassWeights,
}

/// Binary delay classifier
///
/// Starts unfit; [`fit`](DelayClassifier::fit) moves it to the fitted
/// state and refitting replaces the parameters entirely. Fitting takes
/// `&mut self` and must be serialized by the caller;
/// [`predict`](DelayClassifier::predict) is read-only and safe to call
/// concurrently on a fitted, unchanging model.
pub struct DelayClassifier {
    params: Option<FittedParams>,
}

impl DelayClassifier {
    /// Create an unfit classifier
    pub fn new() -> Self {
        Self { params: None }
    }

    /// Whether the model has been fit
    pub fn is_fit(&self) -> bool {
        self.params.is_some()
    }

    /// The class weights used at the last fit, if any
    pub fn class_weights(&self) -> Option<ClassWeights> {
        self.params.as_ref().map(|p| p.class_weights)
    }

    /// Fit the model on extracted features and the delay target
    ///
    /// The fit is deterministic: weights start at zero and gradient
    /// descent runs for exactly [`MAX_ITERATIONS`] steps on the
    /// class-weighted logistic loss.
    pub fn fit(&mut self, features: &FeatureFrame, target: &FeatureFrame) -> Result<(), ModelError> {
        if features.nrows() != target.nrows() {
            return Err(ModelError::DimensionMismatch {
                features: features.nrows(),
                target: target.nrows(),
            });
        }
        if target.ncols() != 1 {
            return Err(ModelError::TargetSchema {
                columns: target.ncols(),
            });
        }

        let y: Array1<f64> = target.data().column(0).to_owned();
        let n1 = y.iter().filter(|&&v| v > 0.5).count();
        let n0 = y.len() - n1;
        if n1 == 0 {
            return Err(ModelError::DegenerateTrainingSet);
        }
        let class_weights = ClassWeights::balanced(n0, n1);
        debug!(
            "Fitting on {} rows ({} delayed), class weights {:?}",
            y.len(),
            n1,
            class_weights
        );

        let x = features.data();
        let n = x.nrows() as f64;
        let sample_weights: Array1<f64> = y.mapv(|yi| {
            if yi > 0.5 {
                class_weights.positive
            } else {
                class_weights.negative
            }
        });

        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut intercept = 0.0;
        for _ in 0..MAX_ITERATIONS {
            let scores = x.dot(&weights) + intercept;
            let probs = scores.mapv(sigmoid);
            let residual = (&probs - &y) * &sample_weights;
            let grad_w = x.t().dot(&residual) / n;
            let grad_b = residual.sum() / n;
            weights -= &(grad_w * LEARNING_RATE);
            intercept -= LEARNING_RATE * grad_b;
        }

        info!("Fit complete over {} features", weights.len());
        self.params = Some(FittedParams {
            weights,
            intercept,
            class_weights,
        });
        Ok(())
    }

    /// Predict a 0/1 delay label per feature row
    ///
    /// Order-preserving and infallible: an unfit model predicts no delay
    /// for every row rather than erroring.
    pub fn predict(&self, features: &FeatureFrame) -> Vec<u8> {
        let Some(params) = &self.params else {
            warn!(
                "Predict called on unfit model, returning {} zeros",
                features.nrows()
            );
            return vec![0; features.nrows()];
        };

        let scores = features.data().dot(&params.weights) + params.intercept;
        scores
            .iter()
            .map(|&s| u8::from(sigmoid(s) >= 0.5))
            .collect()
    }
}

impl Default for DelayClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

//! Classifier artifacts
//!
//! `model.json` holds one of the classifiers below, tagged by `"kind"`:
//!
//! ```json
//! {"kind": "logistic_regression", "coefficients": [0.4, -1.2], "intercept": -0.3}
//! {"kind": "calibrated", "base": {"coefficients": [0.4, -1.2], "intercept": -0.3}, "a": -1.1, "b": 0.2}
//! ```

use crate::collaborator::Classifier;
use crate::error::ModelError;
use ndarray::{Array1, ArrayView1, array};
use serde::{Deserialize, Serialize};

const fn default_threshold() -> f64 {
    0.5
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn class_probabilities(positive: f64) -> Array1<f64> {
    array![1.0 - positive, positive]
}

/// Binary logistic regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature, in feature-name order.
    pub coefficients: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
    /// Positive class is predicted when the probability exceeds this.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticRegression {
    /// Create a model with the default 0.5 decision threshold.
    pub const fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: default_threshold(),
        }
    }

    /// Linear decision value `w·x + b`.
    pub fn decision_function(&self, row: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                artifact: "model",
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        let z = row
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept;

        if z.is_nan() {
            return Err(ModelError::InvalidParameter(
                "decision value is NaN".to_string(),
            ));
        }
        Ok(z)
    }

    fn positive_probability(&self, row: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        self.decision_function(row).map(sigmoid)
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError> {
        self.positive_probability(row).map(class_probabilities)
    }

    fn predict(&self, row: ArrayView1<'_, f64>) -> Result<i64, ModelError> {
        let p = self.positive_probability(row)?;
        Ok(i64::from(p > self.threshold))
    }
}

/// Logistic regression with Platt-scaled probabilities.
///
/// The calibrated probability is `1 / (1 + exp(a·z + b))` where `z` is the
/// base model's decision value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibratedClassifier {
    /// Uncalibrated base model.
    pub base: LogisticRegression,
    /// Platt slope.
    pub a: f64,
    /// Platt offset.
    pub b: f64,
}

impl CalibratedClassifier {
    fn positive_probability(&self, row: ArrayView1<'_, f64>) -> Result<f64, ModelError> {
        let z = self.base.decision_function(row)?;
        Ok(sigmoid(-(self.a * z + self.b)))
    }
}

impl Classifier for CalibratedClassifier {
    fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError> {
        self.positive_probability(row).map(class_probabilities)
    }

    fn predict(&self, row: ArrayView1<'_, f64>) -> Result<i64, ModelError> {
        let p = self.positive_probability(row)?;
        Ok(i64::from(p > self.base.threshold))
    }
}

/// Serialized form of `model.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Plain logistic regression.
    LogisticRegression(LogisticRegression),
    /// Platt-calibrated logistic regression.
    Calibrated(CalibratedClassifier),
}

impl Classifier for ModelArtifact {
    fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError> {
        match self {
            Self::LogisticRegression(model) => model.predict_proba(row),
            Self::Calibrated(model) => model.predict_proba(row),
        }
    }

    fn predict(&self, row: ArrayView1<'_, f64>) -> Result<i64, ModelError> {
        match self {
            Self::LogisticRegression(model) => model.predict(row),
            Self::Calibrated(model) => model.predict(row),
        }
    }
}

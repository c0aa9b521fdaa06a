//! Linear attribution explainer (`shap_explainer.json`).
//!
//! For a linear model the exact Shapley value of feature `i` against a
//! background with mean `μ` is `w_i · (x_i − μ_i)`, in log-odds units.

use crate::collaborator::{Attribution, Explainer};
use crate::error::ModelError;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Shape of the explainer's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    /// One array of per-feature values.
    #[default]
    Single,
    /// One array per class: `[-phi, phi]`.
    PerClass,
}

/// Linear explainer over scaled features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearExplainer {
    /// Model weights, in feature-name order.
    pub coefficients: Vec<f64>,
    /// Background mean of each scaled feature.
    pub means: Vec<f64>,
    /// Output shape.
    #[serde(default)]
    pub output: OutputShape,
}

impl LinearExplainer {
    /// Explainer against a zero-mean background (standard-scaled data).
    pub fn new(coefficients: Vec<f64>) -> Self {
        let means = vec![0.0; coefficients.len()];
        Self {
            coefficients,
            means,
            output: OutputShape::Single,
        }
    }

    /// Same explainer returning per-class arrays.
    pub fn per_class(mut self) -> Self {
        self.output = OutputShape::PerClass;
        self
    }

    fn contributions(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError> {
        if self.coefficients.len() != self.means.len() {
            return Err(ModelError::InvalidParameter(format!(
                "explainer has {} coefficients but {} means",
                self.coefficients.len(),
                self.means.len()
            )));
        }
        if row.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                artifact: "explainer",
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.coefficients.iter().zip(&self.means))
            .map(|(x, (w, mean))| w * (x - mean))
            .collect())
    }
}

impl Explainer for LinearExplainer {
    fn explain(&self, row: ArrayView1<'_, f64>) -> Result<Attribution, ModelError> {
        let phi = self.contributions(row)?;
        Ok(match self.output {
            OutputShape::Single => Attribution::Single(phi),
            OutputShape::PerClass => Attribution::PerClass(vec![-&phi, phi]),
        })
    }
}

//! Collaborator traits
//!
//! The inference pipeline never looks inside a model, scaler or explainer.
//! It only needs the four capabilities below, so any implementation that
//! can be made `Send + Sync` can be dropped into an [`ArtifactBundle`].
//!
//! [`ArtifactBundle`]: crate::ArtifactBundle

use crate::error::ModelError;
use ndarray::{Array1, ArrayView1};
use std::fmt::Debug;

/// Index of the positive ("converts") class in per-class outputs.
pub const POSITIVE_CLASS: usize = 1;

/// A trained binary classifier.
pub trait Classifier: Debug + Send + Sync {
    /// Class probabilities for one scaled row, indexed by class.
    fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError>;

    /// Predicted class for one scaled row.
    fn predict(&self, row: ArrayView1<'_, f64>) -> Result<i64, ModelError>;
}

/// A fitted preprocessing transform applied to an encoded row.
pub trait Preprocessor: Debug + Send + Sync {
    /// Transform one row, preserving column order.
    fn transform(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, ModelError>;
}

/// A per-feature attribution explainer.
pub trait Explainer: Debug + Send + Sync {
    /// Attribution values for one scaled row.
    fn explain(&self, row: ArrayView1<'_, f64>) -> Result<Attribution, ModelError>;
}

/// Raw explainer output.
///
/// Explainers either return a single array of per-feature values or, in
/// binary classification mode, one array per class.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribution {
    /// One value per feature.
    Single(Array1<f64>),
    /// One array per class, indexed by class.
    PerClass(Vec<Array1<f64>>),
}

impl Attribution {
    /// Normalize into the per-feature values of the positive class.
    ///
    /// Fails with the number of classes present when a per-class output
    /// has no positive-class entry.
    pub fn into_positive_class(self) -> Result<Array1<f64>, usize> {
        match self {
            Self::Single(values) => Ok(values),
            Self::PerClass(mut classes) => {
                if classes.len() > POSITIVE_CLASS {
                    Ok(classes.swap_remove(POSITIVE_CLASS))
                } else {
                    Err(classes.len())
                }
            }
        }
    }
}

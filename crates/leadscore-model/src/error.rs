//! Pipeline errors.

use leadscore_artifacts::ModelError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while turning an encoded row into a score.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Frame operation failed (engineering, encoding or selection).
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// An expected feature column is absent.
    #[error("Missing feature during inference: {0}")]
    MissingFeature(String),

    /// A feature column holds text or null where a number is required.
    #[error("Feature '{0}' is not numeric")]
    NonNumericFeature(String),

    /// A frame or collaborator output has the wrong size.
    #[error("{stage}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Stage that produced the output.
        stage: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Classifier output outside its contract.
    #[error("Invalid prediction: {0}")]
    InvalidPrediction(String),

    /// Explainer output unusable as reason codes.
    #[error("Invalid attribution: {0}")]
    InvalidAttribution(String),

    /// A model collaborator failed.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

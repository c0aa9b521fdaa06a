//! Column alignment and scaling
//!
//! The model and the explainer consume a plain vector, so the encoded frame
//! must be flattened in exactly the bundle's feature order. Any column the
//! model expects but the frame lacks fails here, before any model call.

use crate::error::PipelineError;
use leadscore_artifacts::ArtifactBundle;
use ndarray::{Array1, ArrayView1};
use polars::prelude::*;

/// A scaled row, in feature-name order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRow<'a> {
    feature_names: &'a [String],
    values: Array1<f64>,
}

impl<'a> ScaledRow<'a> {
    /// Pair scaled values with their feature names.
    pub fn new(feature_names: &'a [String], values: Array1<f64>) -> Result<Self, PipelineError> {
        if values.len() != feature_names.len() {
            return Err(PipelineError::ShapeMismatch {
                stage: "preprocessor",
                expected: feature_names.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            feature_names,
            values,
        })
    }

    /// Feature names, in column order.
    pub const fn feature_names(&self) -> &'a [String] {
        self.feature_names
    }

    /// Scaled values, in column order.
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Borrowed view for collaborator calls.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Scaled value of a named feature.
    pub fn get(&self, feature: &str) -> Option<f64> {
        self.feature_names
            .iter()
            .position(|name| name == feature)
            .map(|idx| self.values[idx])
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no features.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Flatten a single-row encoded frame into `feature_names` order.
///
/// Extra columns are ignored. A missing column, a text column or a null
/// value fails.
pub fn align_columns(frame: &DataFrame, feature_names: &[String]) -> Result<Array1<f64>, PipelineError> {
    if frame.height() != 1 {
        return Err(PipelineError::ShapeMismatch {
            stage: "encoded frame rows",
            expected: 1,
            actual: frame.height(),
        });
    }

    let mut values = Array1::zeros(feature_names.len());
    for (idx, name) in feature_names.iter().enumerate() {
        if frame.get_column_index(name).is_none() {
            return Err(PipelineError::MissingFeature(name.clone()));
        }

        let column = frame.column(name)?;
        if column.dtype() == &DataType::String {
            return Err(PipelineError::NonNumericFeature(name.clone()));
        }

        values[idx] = column
            .cast(&DataType::Float64)?
            .as_materialized_series()
            .f64()?
            .get(0)
            .ok_or_else(|| PipelineError::NonNumericFeature(name.clone()))?;
    }

    Ok(values)
}

/// Align an encoded frame and run the bundle's preprocessor on it.
pub fn scale_row<'a>(frame: &DataFrame, artifacts: &'a ArtifactBundle) -> Result<ScaledRow<'a>, PipelineError> {
    let feature_names = artifacts.feature_names();
    let encoded = align_columns(frame, feature_names)?;
    let scaled = artifacts.preprocessor().transform(encoded.view())?;
    ScaledRow::new(feature_names, scaled)
}

//! Reason codes from feature attributions.

use crate::align::ScaledRow;
use crate::error::PipelineError;
use leadscore_artifacts::{Attribution, Explainer, POSITIVE_CLASS};
use leadscore_output::ReasonCode;
use ndarray::{Array1, ArrayView1};

/// Number of reason codes returned per score.
pub const DEFAULT_TOP_REASONS: usize = 5;

/// Normalize explainer output into one finite value per feature.
pub fn positive_class_values(
    attribution: Attribution,
    n_features: usize,
) -> Result<Array1<f64>, PipelineError> {
    let values = attribution
        .into_positive_class()
        .map_err(|classes| PipelineError::ShapeMismatch {
            stage: "explainer classes",
            expected: POSITIVE_CLASS + 1,
            actual: classes,
        })?;

    if values.len() != n_features {
        return Err(PipelineError::ShapeMismatch {
            stage: "explainer",
            expected: n_features,
            actual: values.len(),
        });
    }
    if let Some((idx, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PipelineError::InvalidAttribution(format!(
            "value {} for feature {} is not finite",
            value, idx
        )));
    }
    Ok(values)
}

/// The `top_n` strongest attributions, by absolute value.
///
/// Ordered by descending magnitude; equal magnitudes keep feature order.
/// At most [`DEFAULT_TOP_REASONS`] codes are returned whatever `top_n` is.
pub fn top_reason_codes(
    values: ArrayView1<'_, f64>,
    feature_names: &[String],
    top_n: usize,
) -> Vec<ReasonCode> {
    let mut order: Vec<usize> = (0..values.len().min(feature_names.len())).collect();
    order.sort_by(|&a, &b| values[b].abs().total_cmp(&values[a].abs()));

    order
        .into_iter()
        .take(top_n.min(DEFAULT_TOP_REASONS))
        .map(|idx| ReasonCode::new(feature_names[idx].clone(), values[idx]))
        .collect()
}

/// Explain a scaled row and rank its reason codes.
pub fn explain(
    row: &ScaledRow<'_>,
    explainer: &dyn Explainer,
    top_n: usize,
) -> Result<Vec<ReasonCode>, PipelineError> {
    let attribution = explainer.explain(row.view())?;
    let values = positive_class_values(attribution, row.len())?;
    Ok(top_reason_codes(values.view(), row.feature_names(), top_n))
}

//! Single-record inference.
//!
//! Stages run in a fixed order: validate, build a one-row frame, engineer
//! features, encode categoricals, align and scale, predict, explain. Any
//! failure after validation is logged and surfaced as
//! [`InferenceError::Failed`]; no partial result is returned.

use crate::config::PipelineConfig;
use crate::error::InferenceError;
use leadscore_artifacts::ArtifactBundle;
use leadscore_features::{CustomerRecord, encode_categoricals, engineer_features, validate_record};
use leadscore_model::{PipelineError, explain, predict, scale_row};
use leadscore_output::InferenceResult;

/// Score one record with the default configuration.
pub fn run_inference(
    record: &CustomerRecord,
    artifacts: &ArtifactBundle,
) -> Result<InferenceResult, InferenceError> {
    run_inference_with(record, artifacts, &PipelineConfig::default())
}

/// Score one record.
///
/// Missing required fields are reported all at once as
/// [`InferenceError::Validation`] before any other work. Unknown categories
/// encode to -1 and do not fail.
pub fn run_inference_with(
    record: &CustomerRecord,
    artifacts: &ArtifactBundle,
    config: &PipelineConfig,
) -> Result<InferenceResult, InferenceError> {
    validate_record(record)?;

    match score(record, artifacts, config) {
        Ok(result) => {
            tracing::debug!(
                probability = result.probability,
                prediction = result.prediction,
                risk_level = %result.risk_level,
                "Scored record"
            );
            Ok(result)
        }
        Err(err) => {
            tracing::error!(error = %err, cause = ?err, record = ?record, "Inference failed");
            Err(InferenceError::Failed(err))
        }
    }
}

fn score(
    record: &CustomerRecord,
    artifacts: &ArtifactBundle,
    config: &PipelineConfig,
) -> Result<InferenceResult, PipelineError> {
    let frame = record.to_frame()?;
    let engineered = engineer_features(&frame)?;
    let encoded = encode_categoricals(&engineered, artifacts.label_encoders())?;

    let row = scale_row(&encoded, artifacts)?;
    let prediction = predict(&row, artifacts.model())?;
    let reason_codes = explain(&row, artifacts.explainer(), config.top_reasons)?;

    Ok(InferenceResult::new(
        prediction.probability,
        prediction.class,
        prediction.risk_level(),
        reason_codes,
    ))
}

/// A complete sample customer, for smoke tests and the command line.
pub fn example_record() -> CustomerRecord {
    let mut record = CustomerRecord::new();
    record.insert("age", 35);
    record.insert("job", "technician");
    record.insert("marital", "married");
    record.insert("education", "tertiary");
    record.insert("default", "no");
    record.insert("balance", 1500);
    record.insert("housing", "yes");
    record.insert("loan", "no");
    record.insert("contact", "cellular");
    record.insert("day", 15);
    record.insert("month", "may");
    record.insert("campaign", 2);
    record.insert("pdays", -1);
    record.insert("previous", 0);
    record.insert("poutcome", "unknown");
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadscore_features::REQUIRED_FIELDS;

    #[test]
    fn test_example_record_is_complete() {
        let record = example_record();
        assert_eq!(record.len(), REQUIRED_FIELDS.len());
        assert!(validate_record(&record).is_ok());
    }
}

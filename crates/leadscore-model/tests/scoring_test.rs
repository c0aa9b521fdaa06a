//! Scaling, prediction and explanation against a hand-built bundle.

use approx::assert_relative_eq;
use leadscore_artifacts::{
    ArtifactBundle, LabelEncoders, LinearExplainer, LogisticRegression, StandardScaler,
};
use leadscore_model::{PipelineError, classify_risk, explain, predict, scale_row};
use leadscore_output::{Direction, RiskLevel};
use polars::prelude::*;

fn feature_names() -> Vec<String> {
    ["balance", "campaign", "job", "prev_success"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn bundle(explainer: LinearExplainer) -> ArtifactBundle {
    ArtifactBundle::new(
        Box::new(LogisticRegression::new(vec![0.5, -0.8, 0.1, 1.5], -0.2)),
        Box::new(StandardScaler::new(
            vec![1000.0, 2.0, 4.0, 0.0],
            vec![500.0, 1.0, 2.0, 1.0],
        )),
        LabelEncoders::new(),
        feature_names(),
        Box::new(explainer),
    )
}

fn encoded_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("job".into(), [6i64]),
        Column::new("balance".into(), [1500i64]),
        Column::new("campaign".into(), [1i64]),
        Column::new("prev_success".into(), [0i64]),
        Column::new("marital".into(), [1i64]),
    ])
    .unwrap()
}

#[test]
fn test_scaled_in_feature_order() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let row = scale_row(&encoded_frame(), &artifacts).unwrap();

    assert_eq!(row.feature_names(), artifacts.feature_names());
    assert_relative_eq!(row.get("balance").unwrap(), 1.0);
    assert_relative_eq!(row.get("campaign").unwrap(), -1.0);
    assert_relative_eq!(row.get("job").unwrap(), 1.0);
    assert_relative_eq!(row.get("prev_success").unwrap(), 0.0);
}

#[test]
fn test_predict_and_tier() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let row = scale_row(&encoded_frame(), &artifacts).unwrap();
    let prediction = predict(&row, artifacts.model()).unwrap();

    // z = 0.5 + 0.8 + 0.1 - 0.2 = 1.2
    let expected = 1.0 / (1.0 + (-1.2f64).exp());
    assert_relative_eq!(prediction.probability, expected, epsilon = 1e-12);
    assert_eq!(prediction.class, 1);
    assert_eq!(prediction.risk_level(), RiskLevel::High);
    assert_eq!(classify_risk(prediction.probability), RiskLevel::High);
}

#[test]
fn test_reason_codes_ranked() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let row = scale_row(&encoded_frame(), &artifacts).unwrap();
    let reasons = explain(&row, artifacts.explainer(), 5).unwrap();

    assert_eq!(reasons.len(), 4);
    let features: Vec<_> = reasons.iter().map(|r| r.feature.as_str()).collect();
    assert_eq!(features, ["campaign", "balance", "job", "prev_success"]);
    assert_eq!(reasons[0].direction, Direction::Positive);
    assert_relative_eq!(reasons[0].shap_value, 0.8);
    assert_eq!(reasons[3].direction, Direction::Negative);
}

#[test]
fn test_per_class_explainer_matches_single() {
    let single = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let per_class = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]).per_class());

    let a = scale_row(&encoded_frame(), &single).unwrap();
    let b = scale_row(&encoded_frame(), &per_class).unwrap();
    assert_eq!(
        explain(&a, single.explainer(), 5).unwrap(),
        explain(&b, per_class.explainer(), 5).unwrap()
    );
}

#[test]
fn test_top_n_truncates() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let row = scale_row(&encoded_frame(), &artifacts).unwrap();
    assert_eq!(explain(&row, artifacts.explainer(), 2).unwrap().len(), 2);
}

#[test]
fn test_missing_feature_fails_before_model() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8, 0.1, 1.5]));
    let frame = encoded_frame().drop("prev_success").unwrap();
    assert!(matches!(
        scale_row(&frame, &artifacts),
        Err(PipelineError::MissingFeature(ref name)) if name == "prev_success"
    ));
}

#[test]
fn test_explainer_width_mismatch() {
    let artifacts = bundle(LinearExplainer::new(vec![0.5, -0.8]));
    let row = scale_row(&encoded_frame(), &artifacts).unwrap();
    assert!(explain(&row, artifacts.explainer(), 5).is_err());
}

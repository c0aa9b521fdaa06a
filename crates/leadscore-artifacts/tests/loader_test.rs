//! Integration tests for artifact loading

use approx::assert_relative_eq;
use leadscore_artifacts::{
    ArtifactError, ArtifactKind, Attribution, artifact_path, load_artifacts,
};
use ndarray::array;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_artifact(dir: &Path, kind: ArtifactKind, contents: &str) {
    fs::write(artifact_path(dir, kind), contents).unwrap();
}

fn write_all(dir: &Path) {
    write_artifact(
        dir,
        ArtifactKind::Model,
        r#"{"kind": "logistic_regression", "coefficients": [1.0, -0.5], "intercept": 0.0}"#,
    );
    write_artifact(
        dir,
        ArtifactKind::Preprocessor,
        r#"{"mean": [0.0, 10.0], "scale": [1.0, 5.0]}"#,
    );
    write_artifact(
        dir,
        ArtifactKind::LabelEncoders,
        r#"{"job": {"classes": ["admin.", "technician"]}}"#,
    );
    write_artifact(dir, ArtifactKind::FeatureNames, r#"["job", "balance"]"#);
    write_artifact(
        dir,
        ArtifactKind::Explainer,
        r#"{"coefficients": [1.0, -0.5], "means": [0.0, 0.0], "output": "per_class"}"#,
    );
}

#[test]
fn test_load_complete_directory() {
    let dir = TempDir::new().unwrap();
    write_all(dir.path());

    let bundle = load_artifacts(dir.path()).unwrap();
    assert_eq!(bundle.feature_names(), ["job", "balance"]);
    assert_eq!(bundle.label_encoders()["job"].encode("technician"), 1);

    let scaled = bundle.preprocessor().transform(array![1.0, 20.0].view()).unwrap();
    assert_eq!(scaled, array![1.0, 2.0]);

    let proba = bundle.model().predict_proba(scaled.view()).unwrap();
    // z = 1.0 - 1.0 = 0
    assert_relative_eq!(proba[1], 0.5);

    let attribution = bundle.explainer().explain(scaled.view()).unwrap();
    assert!(matches!(attribution, Attribution::PerClass(ref classes) if classes.len() == 2));
}

#[rstest]
#[case(ArtifactKind::Model)]
#[case(ArtifactKind::Preprocessor)]
#[case(ArtifactKind::LabelEncoders)]
#[case(ArtifactKind::FeatureNames)]
#[case(ArtifactKind::Explainer)]
fn test_missing_file_is_named(#[case] missing: ArtifactKind) {
    let dir = TempDir::new().unwrap();
    write_all(dir.path());
    fs::remove_file(artifact_path(dir.path(), missing)).unwrap();

    let err = load_artifacts(dir.path()).unwrap_err();
    match err {
        ArtifactError::NotFound { path } => {
            assert_eq!(path, artifact_path(dir.path(), missing));
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = load_artifacts(dir.path().join("nope")).unwrap_err();
    assert!(err.to_string().contains("model.json"));
}

#[test]
fn test_unparseable_artifact() {
    let dir = TempDir::new().unwrap();
    write_all(dir.path());
    write_artifact(dir.path(), ArtifactKind::FeatureNames, "not json");

    let err = load_artifacts(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::Deserialize { .. }));
    assert!(err.to_string().contains("feature_names.json"));
}

#[test]
fn test_content_is_not_validated_at_load() {
    let dir = TempDir::new().unwrap();
    write_all(dir.path());
    // Three coefficients for a two-feature bundle still loads
    write_artifact(
        dir.path(),
        ArtifactKind::Model,
        r#"{"kind": "logistic_regression", "coefficients": [1.0, 2.0, 3.0], "intercept": 0.0}"#,
    );

    let bundle = load_artifacts(dir.path()).unwrap();
    assert!(bundle.model().predict(array![0.0, 0.0].view()).is_err());
}

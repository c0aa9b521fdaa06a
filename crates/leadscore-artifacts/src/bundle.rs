//! Artifact bundle and loader.
//!
//! The training pipeline writes five files into one directory. They are
//! loaded once at startup, in a fixed order, and never mutated afterwards.

use crate::collaborator::{Classifier, Explainer, Preprocessor};
use crate::encoder::LabelEncoders;
use crate::error::{ArtifactError, Result};
use crate::explainer::LinearExplainer;
use crate::model::ModelArtifact;
use crate::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";

/// The five artifacts, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Trained classifier.
    Model,
    /// Fitted scaler.
    Preprocessor,
    /// Label encoders keyed by field.
    LabelEncoders,
    /// Ordered feature names.
    FeatureNames,
    /// Attribution explainer.
    Explainer,
}

impl ArtifactKind {
    /// All artifacts, in load order.
    pub const fn all() -> [Self; 5] {
        [
            Self::Model,
            Self::Preprocessor,
            Self::LabelEncoders,
            Self::FeatureNames,
            Self::Explainer,
        ]
    }

    /// File name inside the artifact directory.
    ///
    /// These names are shared with the training pipeline.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Model => "model.json",
            Self::Preprocessor => "preprocessor.json",
            Self::LabelEncoders => "label_encoders.json",
            Self::FeatureNames => "feature_names.json",
            Self::Explainer => "shap_explainer.json",
        }
    }

    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Preprocessor => "preprocessor",
            Self::LabelEncoders => "label_encoders",
            Self::FeatureNames => "feature_names",
            Self::Explainer => "shap_explainer",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to reproduce training-time inference.
///
/// Read-only after construction. All collaborators are `Send + Sync`, so a
/// bundle can be shared across worker threads behind an `Arc`.
#[derive(Debug)]
pub struct ArtifactBundle {
    model: Box<dyn Classifier>,
    preprocessor: Box<dyn Preprocessor>,
    label_encoders: LabelEncoders,
    feature_names: Vec<String>,
    explainer: Box<dyn Explainer>,
}

impl ArtifactBundle {
    /// Assemble a bundle from already-built collaborators.
    pub fn new(
        model: Box<dyn Classifier>,
        preprocessor: Box<dyn Preprocessor>,
        label_encoders: LabelEncoders,
        feature_names: Vec<String>,
        explainer: Box<dyn Explainer>,
    ) -> Self {
        Self {
            model,
            preprocessor,
            label_encoders,
            feature_names,
            explainer,
        }
    }

    /// Trained classifier.
    pub fn model(&self) -> &dyn Classifier {
        self.model.as_ref()
    }

    /// Fitted preprocessor.
    pub fn preprocessor(&self) -> &dyn Preprocessor {
        self.preprocessor.as_ref()
    }

    /// Label encoders keyed by categorical field.
    pub const fn label_encoders(&self) -> &LabelEncoders {
        &self.label_encoders
    }

    /// Column order expected by the model and explainer.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Attribution explainer.
    pub fn explainer(&self) -> &dyn Explainer {
        self.explainer.as_ref()
    }
}

/// Load all five artifacts from `dir`.
///
/// Fails on the first missing or unreadable file with an error naming its
/// path. Artifact contents are not validated beyond deserialization.
pub fn load_artifacts(dir: impl AsRef<Path>) -> Result<ArtifactBundle> {
    let dir = dir.as_ref();

    let model: ModelArtifact = load_artifact(dir, ArtifactKind::Model)?;
    let preprocessor: StandardScaler = load_artifact(dir, ArtifactKind::Preprocessor)?;
    let label_encoders: LabelEncoders = load_artifact(dir, ArtifactKind::LabelEncoders)?;
    let feature_names: Vec<String> = load_artifact(dir, ArtifactKind::FeatureNames)?;
    let explainer: LinearExplainer = load_artifact(dir, ArtifactKind::Explainer)?;

    tracing::info!(
        dir = %dir.display(),
        features = feature_names.len(),
        encoders = label_encoders.len(),
        "All artifacts loaded successfully"
    );

    Ok(ArtifactBundle::new(
        Box::new(model),
        Box::new(preprocessor),
        label_encoders,
        feature_names,
        Box::new(explainer),
    ))
}

/// Path of `kind` inside `dir`.
pub fn artifact_path(dir: &Path, kind: ArtifactKind) -> PathBuf {
    dir.join(kind.file_name())
}

fn load_artifact<T: DeserializeOwned>(dir: &Path, kind: ArtifactKind) -> Result<T> {
    let path = artifact_path(dir, kind);
    if !path.is_file() {
        return Err(ArtifactError::NotFound { path });
    }

    tracing::info!(artifact = %kind, path = %path.display(), "Loading artifact");

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(source) => return Err(ArtifactError::Io { path, source }),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| ArtifactError::Deserialize { path, source })
}

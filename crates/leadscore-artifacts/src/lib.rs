#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadscore/leadscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bundle;
pub mod collaborator;
pub mod encoder;
pub mod error;
pub mod explainer;
pub mod model;
pub mod scaler;

pub use bundle::{ArtifactBundle, ArtifactKind, DEFAULT_ARTIFACTS_DIR, artifact_path, load_artifacts};
pub use collaborator::{Attribution, Classifier, Explainer, POSITIVE_CLASS, Preprocessor};
pub use encoder::{LabelEncoder, LabelEncoders, UNKNOWN_CODE};
pub use error::{ArtifactError, ModelError, Result};
pub use explainer::{LinearExplainer, OutputShape};
pub use model::{CalibratedClassifier, LogisticRegression, ModelArtifact};
pub use scaler::StandardScaler;

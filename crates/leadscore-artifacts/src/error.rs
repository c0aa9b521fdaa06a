//! Error types for artifact loading and model collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for artifact loading.
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Errors that can occur while loading the artifact bundle.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Expected artifact file does not exist.
    #[error("Artifact file not found: {}", path.display())]
    NotFound {
        /// Path that was expected to hold the artifact.
        path: PathBuf,
    },

    /// Artifact file exists but could not be read.
    #[error("Failed to read artifact {}: {source}", path.display())]
    Io {
        /// Path of the artifact.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Artifact file could not be deserialized.
    #[error("Failed to deserialize artifact {}: {source}", path.display())]
    Deserialize {
        /// Path of the artifact.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by a model collaborator while serving a request.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Input row width does not match the fitted artifact.
    #[error("{artifact}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        /// Artifact that rejected the row.
        artifact: &'static str,
        /// Width the artifact was fitted on.
        expected: usize,
        /// Width of the row it received.
        actual: usize,
    },

    /// Fitted parameter is unusable (e.g. non-finite).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

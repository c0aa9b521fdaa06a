//! Shared fixtures for integration tests.

#![allow(dead_code)]

use leadscore::artifacts::{ArtifactBundle, load_artifacts};
use std::path::PathBuf;

/// Directory holding the demo artifact bundle.
pub fn demo_artifacts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/artifacts")
}

/// The demo artifact bundle.
pub fn demo_artifacts() -> ArtifactBundle {
    load_artifacts(demo_artifacts_dir()).unwrap()
}

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadscore/leadscore/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use leadscore_artifacts as artifacts;
pub use leadscore_features as features;
pub use leadscore_model as model;
pub use leadscore_output as output;

pub use batch::{detect_delimiter, score_csv, score_csv_path};
pub use config::{BatchConfig, PipelineConfig};
pub use error::{BatchError, InferenceError};
pub use pipeline::{example_record, run_inference, run_inference_with};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

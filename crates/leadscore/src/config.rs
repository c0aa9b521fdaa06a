//! Scoring configuration.

use leadscore_model::DEFAULT_TOP_REASONS;
use serde::{Deserialize, Serialize};

/// Default row cap for one batch upload.
pub const DEFAULT_MAX_ROWS: usize = 1000;

/// Per-record scoring options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Reason codes returned per score; values above 5 are capped at 5.
    pub top_reasons: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_reasons: DEFAULT_TOP_REASONS,
        }
    }
}

/// Batch scoring options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Largest accepted number of data rows.
    pub max_rows: usize,

    /// Options applied to every row.
    pub pipeline: PipelineConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            pipeline: PipelineConfig::default(),
        }
    }
}
